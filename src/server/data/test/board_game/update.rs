use super::*;

/// Tests updating a board game's name and year.
///
/// Verifies that both fields are persisted and the last modified date moves forward.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_name_and_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_board_game(db).await?;

    let repo = BoardGameRepository::new(db);
    let updated = repo
        .update(UpdateBoardGameParams {
            id: game.id,
            name: Some("Axis & Allies".to_string()),
            year: Some(1981),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Axis & Allies");
    assert_eq!(updated.year, 1981);
    assert!(updated.last_modified_date >= game.last_modified_date);

    let stored = BoardGame::find_by_id(game.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Axis & Allies");
    assert_eq!(stored.year, 1981);

    Ok(())
}

/// Tests that omitted fields keep their stored values.
///
/// Expected: Ok(Some) with only the year changed
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::board_game::BoardGameFactory::new(db)
        .name("Citadels")
        .build()
        .await?;

    let repo = BoardGameRepository::new(db);
    let updated = repo
        .update(UpdateBoardGameParams {
            id: game.id,
            name: None,
            year: Some(2000),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Citadels");
    assert_eq!(updated.year, 2000);

    Ok(())
}

/// Tests updating a board game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardGameRepository::new(db);
    let result = repo
        .update(UpdateBoardGameParams {
            id: 999,
            name: Some("Ghost".to_string()),
            year: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
