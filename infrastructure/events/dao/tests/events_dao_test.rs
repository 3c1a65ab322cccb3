use events_dao::EventDao;
use test_utils::*;

async fn setup() -> anyhow::Result<(TestPostgresContainer, EventDao)> {
    let container = TestPostgresContainer::new().await?;
    let dao = EventDao::new(create_sql_connect(&container));
    Ok((container, dao))
}

#[tokio::test]
async fn test_insert_returns_stored_event() {
    let (container, dao) = setup().await.unwrap();
    let user_id = create_test_user(&container).await.unwrap();

    let event = dao.insert(&user_id, "page_view").await.unwrap();

    assert!(event.id > 0);
    assert_eq!(event.user_id, user_id);
    assert_eq!(event.event_type, "page_view");
}

#[tokio::test]
async fn test_count_events_sees_new_rows() {
    let (container, dao) = setup().await.unwrap();
    let user_id = create_test_user(&container).await.unwrap();

    let before = dao.count_events().await.unwrap();
    dao.insert(&user_id, "page_view").await.unwrap();
    dao.insert(&user_id, "signup").await.unwrap();
    let after = dao.count_events().await.unwrap();

    assert_eq!(after - before, 2);
}

#[tokio::test]
async fn test_count_by_type_filters() {
    let (container, dao) = setup().await.unwrap();
    let user_id = create_test_user(&container).await.unwrap();
    let event_type = unique_event_type();

    let before = dao.count_by_type(&event_type).await.unwrap();
    assert_eq!(before, 0);

    dao.insert(&user_id, &event_type).await.unwrap();
    dao.insert(&user_id, "some_other_type").await.unwrap();

    let after = dao.count_by_type(&event_type).await.unwrap();
    assert_eq!(after, 1);
}
