use super::*;

/// Tests counting every record without a filter.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let repo = ListingRepository::<BoardGames>::new(db);

    assert_eq!(repo.count(None).await?, 3);

    Ok(())
}

/// Tests counting only records that match the filter.
///
/// Expected: Ok with the number of case-insensitive name matches
#[tokio::test]
async fn counts_filtered_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let repo = ListingRepository::<BoardGames>::new(db);

    assert_eq!(repo.count(Some("is")).await?, 1);
    assert_eq!(repo.count(Some("al")).await?, 1);
    assert_eq!(repo.count(Some("zzz")).await?, 0);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Domain).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::<Domains>::new(db);

    assert_eq!(repo.count(None).await?, 0);

    Ok(())
}

/// Tests that LIKE wildcards in the filter match themselves.
///
/// Expected: `%` matches only the title containing a percent sign, `_` matches none
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;
    factory::board_game::BoardGameFactory::new(db)
        .name("100% Orange Juice")
        .year(2008)
        .build()
        .await?;

    let repo = ListingRepository::<BoardGames>::new(db);

    assert_eq!(repo.count(None).await?, 4);
    assert_eq!(repo.count(Some("%")).await?, 1);
    assert_eq!(repo.count(Some("_")).await?, 0);
    assert_eq!(repo.count(Some("0% O")).await?, 1);

    Ok(())
}
