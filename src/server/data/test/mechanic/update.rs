use super::*;

/// Tests renaming a mechanic.
///
/// Expected: Ok(Some) with the new name persisted
#[tokio::test]
async fn renames_mechanic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Mechanic).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_mechanic(db).await?;

    let repo = MechanicRepository::new(db);
    let updated = repo
        .update(UpdateMechanicParams {
            id: model.id,
            name: Some("Hand Management".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Hand Management");

    let stored = Mechanic::find_by_id(model.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Hand Management");

    Ok(())
}

/// Tests an update without a name.
///
/// Expected: Ok(Some) with the name unchanged
#[tokio::test]
async fn keeps_name_when_omitted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Mechanic).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_mechanic(db).await?;

    let repo = MechanicRepository::new(db);
    let updated = repo
        .update(UpdateMechanicParams {
            id: model.id,
            name: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, model.name);

    Ok(())
}

/// Tests updating a mechanic that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Mechanic).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MechanicRepository::new(db);
    let result = repo
        .update(UpdateMechanicParams {
            id: 7,
            name: Some("Hand Management".to_string()),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
