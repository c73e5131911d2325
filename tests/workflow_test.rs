//! Scrap item, sale and dashboard workflow tests against a real database.

mod common;

use scrap_market::domain::{
    DashboardStats, NewCompany, NewSale, ScrapStatus, TransactionType, UserRole,
};
use scrap_market::errors::AppError;
use scrap_market::infra::{
    LedgerRepository, LedgerStore, SaleRepository, SaleStore, UserRepository, UserStore,
};
use scrap_market::services::ServiceContainer;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use common::{create_user, new_item, setup, TestContext};

fn ledger(ctx: &TestContext) -> LedgerStore {
    LedgerStore::new(ctx.db.get_connection())
}

/// Make every ledger insert matching `condition` fail inside the database
async fn reject_ledger_writes(ctx: &TestContext, condition: &str) {
    let sql = format!(
        "CREATE TRIGGER reject_ledger BEFORE INSERT ON transactions \
         WHEN {} BEGIN SELECT RAISE(ABORT, 'ledger unavailable'); END",
        condition
    );
    ctx.db.connection().execute_unprepared(&sql).await.unwrap();
}

async fn company(ctx: &TestContext, admin: &scrap_market::User) -> scrap_market::domain::Company {
    ctx.services
        .companies()
        .create(
            admin,
            NewCompany {
                name: "Green Metals Ltd".to_string(),
                contact: "+1 555 0100".to_string(),
                address: "12 Foundry Road".to_string(),
                email: Some("buying@greenmetals.example".to_string()),
            },
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_submit_creates_pending_item_with_buy_entry() {
    let ctx = setup().await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;

    let item = ctx
        .services
        .scrap_items()
        .submit(&user, new_item(100.0))
        .await
        .unwrap();

    let mine = ctx.services.scrap_items().list_mine(&user).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, item.id);
    assert_eq!(mine[0].status, ScrapStatus::Pending);

    let entries = ledger(&ctx).list_for_item(item.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].transaction_type, TransactionType::Buy);
    assert_eq!(entries[0].amount, 100.0);
    assert_eq!(entries[0].user_id, user.id);
}

#[tokio::test]
async fn test_list_mine_only_returns_own_items() {
    let ctx = setup().await;
    let jane = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let joe = create_user(&ctx, "joe@example.com", UserRole::User).await;

    ctx.services.scrap_items().submit(&jane, new_item(10.0)).await.unwrap();
    ctx.services.scrap_items().submit(&joe, new_item(20.0)).await.unwrap();

    let mine = ctx.services.scrap_items().list_mine(&jane).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, jane.id);
}

#[tokio::test]
async fn test_submit_rejects_invalid_measurements() {
    let ctx = setup().await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;

    let mut zero_weight = new_item(10.0);
    zero_weight.weight = 0.0;
    let result = ctx.services.scrap_items().submit(&user, zero_weight).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = ctx.services.scrap_items().submit(&user, new_item(-1.0)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    assert!(ctx.services.scrap_items().list_mine(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_listing_carries_owner_details() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    ctx.services.scrap_items().submit(&user, new_item(10.0)).await.unwrap();

    let rows = ctx.services.scrap_items().list_all_with_owner(&admin).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_email, "jane@example.com");
    assert_eq!(rows[0].user_name, user.name);
}

#[tokio::test]
async fn test_set_status_unknown_item_is_not_found() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;

    let result = ctx
        .services
        .scrap_items()
        .set_status(&admin, Uuid::new_v4(), ScrapStatus::Approved)
        .await;
    assert!(matches!(result, Err(AppError::NotFound("Scrap item"))));
}

#[tokio::test]
async fn test_set_status_bumps_updated_at() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let item = ctx.services.scrap_items().submit(&user, new_item(10.0)).await.unwrap();

    ctx.services
        .scrap_items()
        .set_status(&admin, item.id, ScrapStatus::Rejected)
        .await
        .unwrap();

    let mine = ctx.services.scrap_items().list_mine(&user).await.unwrap();
    assert_eq!(mine[0].status, ScrapStatus::Rejected);
    assert!(mine[0].updated_at >= item.updated_at);
    assert_eq!(mine[0].created_at, item.created_at);
}

#[tokio::test]
async fn test_sell_requires_approved_item_and_has_no_side_effects() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;
    let item = ctx.services.scrap_items().submit(&user, new_item(100.0)).await.unwrap();

    for status in [ScrapStatus::Pending, ScrapStatus::Rejected] {
        ctx.services
            .scrap_items()
            .set_status(&admin, item.id, status)
            .await
            .unwrap();

        let result = ctx
            .services
            .sales()
            .sell(
                &admin,
                NewSale {
                    scrap_item_id: item.id,
                    company_id: buyer.id,
                    selling_price: 150.0,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::InvalidState(_))));

        let mine = ctx.services.scrap_items().list_mine(&user).await.unwrap();
        assert_eq!(mine[0].status, status);
    }

    assert!(ctx.services.sales().list_all(&admin).await.unwrap().is_empty());
    let entries = ledger(&ctx).list_for_item(item.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].transaction_type, TransactionType::Buy);
}

#[tokio::test]
async fn test_sell_approved_item_records_profit_and_owner_earnings() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;
    let item = ctx.services.scrap_items().submit(&user, new_item(100.0)).await.unwrap();
    ctx.services
        .scrap_items()
        .set_status(&admin, item.id, ScrapStatus::Approved)
        .await
        .unwrap();

    let sale = ctx
        .services
        .sales()
        .sell(
            &admin,
            NewSale {
                scrap_item_id: item.id,
                company_id: buyer.id,
                selling_price: 150.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(sale.profit, 50.0);

    let mine = ctx.services.scrap_items().list_mine(&user).await.unwrap();
    assert_eq!(mine[0].status, ScrapStatus::Sold);

    let sells: Vec<_> = ledger(&ctx)
        .list_for_item(item.id)
        .await
        .unwrap()
        .into_iter()
        .filter(|e| e.transaction_type == TransactionType::Sell)
        .collect();
    assert_eq!(sells.len(), 1);
    assert_eq!(sells[0].amount, 150.0);
    assert_eq!(sells[0].user_id, user.id);

    let details = ctx.services.sales().list_all(&admin).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].scrap_item.id, item.id);
    assert_eq!(details[0].company.name, "Green Metals Ltd");
}

#[tokio::test]
async fn test_second_sale_of_same_item_fails() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;
    let item = ctx.services.scrap_items().submit(&user, new_item(100.0)).await.unwrap();
    ctx.services
        .scrap_items()
        .set_status(&admin, item.id, ScrapStatus::Approved)
        .await
        .unwrap();

    let sale = NewSale {
        scrap_item_id: item.id,
        company_id: buyer.id,
        selling_price: 80.0,
    };
    let first = ctx.services.sales().sell(&admin, sale.clone()).await.unwrap();
    assert_eq!(first.profit, -20.0);

    let second = ctx.services.sales().sell(&admin, sale).await;
    assert!(matches!(second, Err(AppError::InvalidState(_))));

    let store = SaleStore::new(ctx.db.get_connection());
    assert_eq!(store.find_by_item(item.id).await.unwrap().map(|s| s.id), Some(first.id));
}

#[tokio::test]
async fn test_failed_buy_entry_rolls_back_submission() {
    let ctx = setup().await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    reject_ledger_writes(&ctx, "1").await;

    let result = ctx.services.scrap_items().submit(&user, new_item(100.0)).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let mine = ctx.services.scrap_items().list_mine(&user).await.unwrap();
    assert!(mine.is_empty());
}

#[tokio::test]
async fn test_failed_sell_entry_rolls_back_sale() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;
    let item = ctx.services.scrap_items().submit(&user, new_item(100.0)).await.unwrap();
    ctx.services
        .scrap_items()
        .set_status(&admin, item.id, ScrapStatus::Approved)
        .await
        .unwrap();
    reject_ledger_writes(&ctx, "NEW.transaction_type = 'sell'").await;

    let result = ctx
        .services
        .sales()
        .sell(
            &admin,
            NewSale {
                scrap_item_id: item.id,
                company_id: buyer.id,
                selling_price: 150.0,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let mine = ctx.services.scrap_items().list_mine(&user).await.unwrap();
    assert_eq!(mine[0].status, ScrapStatus::Approved);

    let store = SaleStore::new(ctx.db.get_connection());
    assert!(store.find_by_item(item.id).await.unwrap().is_none());

    let entries = ledger(&ctx).list_for_item(item.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].transaction_type, TransactionType::Buy);
}

#[tokio::test]
async fn test_sell_unknown_item_or_company_is_not_found() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;

    let result = ctx
        .services
        .sales()
        .sell(
            &admin,
            NewSale {
                scrap_item_id: Uuid::new_v4(),
                company_id: buyer.id,
                selling_price: 10.0,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound("Scrap item"))));

    let item = ctx.services.scrap_items().submit(&user, new_item(5.0)).await.unwrap();
    ctx.services
        .scrap_items()
        .set_status(&admin, item.id, ScrapStatus::Approved)
        .await
        .unwrap();
    let result = ctx
        .services
        .sales()
        .sell(
            &admin,
            NewSale {
                scrap_item_id: item.id,
                company_id: Uuid::new_v4(),
                selling_price: 10.0,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound("Company"))));
}

#[tokio::test]
async fn test_dashboard_on_empty_store_is_all_zero() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;

    match ctx.services.dashboard().stats(&admin).await.unwrap() {
        DashboardStats::Admin(stats) => {
            assert_eq!(stats.total_scrap_items, 0);
            assert_eq!(stats.pending_items, 0);
            assert_eq!(stats.approved_items, 0);
            assert_eq!(stats.sold_items, 0);
            assert_eq!(stats.total_revenue, 0.0);
            assert_eq!(stats.total_profit, 0.0);
            assert_eq!(stats.total_companies, 0);
        }
        other => panic!("expected admin stats, got {:?}", other),
    }

    match ctx.services.dashboard().stats(&user).await.unwrap() {
        DashboardStats::User(stats) => {
            assert_eq!(stats.total_items, 0);
            assert_eq!(stats.total_earnings, 0.0);
        }
        other => panic!("expected user stats, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dashboard_after_sale() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let jane = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let joe = create_user(&ctx, "joe@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;

    let sold = ctx.services.scrap_items().submit(&jane, new_item(100.0)).await.unwrap();
    ctx.services.scrap_items().submit(&jane, new_item(40.0)).await.unwrap();
    ctx.services.scrap_items().submit(&joe, new_item(60.0)).await.unwrap();
    ctx.services
        .scrap_items()
        .set_status(&admin, sold.id, ScrapStatus::Approved)
        .await
        .unwrap();
    ctx.services
        .sales()
        .sell(
            &admin,
            NewSale {
                scrap_item_id: sold.id,
                company_id: buyer.id,
                selling_price: 150.0,
            },
        )
        .await
        .unwrap();

    match ctx.services.dashboard().stats(&admin).await.unwrap() {
        DashboardStats::Admin(stats) => {
            assert_eq!(stats.total_scrap_items, 3);
            assert_eq!(stats.pending_items, 2);
            assert_eq!(stats.approved_items, 0);
            assert_eq!(stats.sold_items, 1);
            assert_eq!(stats.total_revenue, 150.0);
            assert_eq!(stats.total_profit, 50.0);
            assert_eq!(stats.total_companies, 1);
        }
        other => panic!("expected admin stats, got {:?}", other),
    }

    match ctx.services.dashboard().stats(&jane).await.unwrap() {
        DashboardStats::User(stats) => {
            assert_eq!(stats.total_items, 2);
            assert_eq!(stats.pending_items, 1);
            assert_eq!(stats.sold_items, 1);
            assert_eq!(stats.total_earnings, 150.0);
        }
        other => panic!("expected user stats, got {:?}", other),
    }

    match ctx.services.dashboard().stats(&joe).await.unwrap() {
        DashboardStats::User(stats) => {
            assert_eq!(stats.total_items, 1);
            assert_eq!(stats.total_earnings, 0.0);
        }
        other => panic!("expected user stats, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_admin_is_forbidden_from_admin_operations() {
    let ctx = setup().await;
    let admin = create_user(&ctx, "admin@scrapmaster.com", UserRole::Admin).await;
    let user = create_user(&ctx, "jane@example.com", UserRole::User).await;
    let buyer = company(&ctx, &admin).await;
    let item = ctx.services.scrap_items().submit(&user, new_item(10.0)).await.unwrap();

    let services = &ctx.services;
    assert!(matches!(
        services.scrap_items().list_all_with_owner(&user).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        services.scrap_items().set_status(&user, item.id, ScrapStatus::Approved).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(services.companies().list(&user).await, Err(AppError::Forbidden)));
    assert!(matches!(services.sales().list_all(&user).await, Err(AppError::Forbidden)));
    assert!(matches!(
        services
            .sales()
            .sell(
                &user,
                NewSale {
                    scrap_item_id: item.id,
                    company_id: buyer.id,
                    selling_price: 1.0,
                },
            )
            .await,
        Err(AppError::Forbidden)
    ));

    let mine = services.scrap_items().list_mine(&user).await.unwrap();
    assert_eq!(mine[0].status, ScrapStatus::Pending);
}

#[tokio::test]
async fn test_bootstrap_admin_is_idempotent() {
    let ctx = setup().await;
    let users = ctx.services.users();

    let first = users
        .ensure_admin("admin@scrapmaster.com", "System Admin")
        .await
        .unwrap();
    let second = users
        .ensure_admin("admin@scrapmaster.com", "System Admin")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.role, UserRole::Admin);

    let store = UserStore::new(ctx.db.get_connection());
    assert_eq!(store.count_by_email("admin@scrapmaster.com").await.unwrap(), 1);
}
