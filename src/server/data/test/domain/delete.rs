use super::*;

/// Tests deleting a domain.
///
/// Expected: Ok(Some) with the deleted domain, which is no longer stored
#[tokio::test]
async fn deletes_domain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Domain).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_domain(db).await?;

    let repo = DomainRepository::new(db);
    let deleted = repo.delete(model.id).await?.unwrap();

    assert_eq!(deleted.id, model.id);
    assert!(Domain::find_by_id(model.id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a domain that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Domain).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DomainRepository::new(db);

    assert!(repo.delete(7).await?.is_none());

    Ok(())
}
