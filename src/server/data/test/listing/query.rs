use super::*;

/// Tests the combined page and count for the catalog example.
///
/// Three games exist and a page of two is requested, sorted by name ascending.
///
/// Expected: Ok with Axis & Allies and Citadels, and a count of 3
#[tokio::test]
async fn returns_page_and_pre_window_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let repo = ListingRepository::<BoardGames>::new(db);
    let (page, count) = repo.query(&request(0, 2, "Name", "ASC", None)).await?;

    let names: Vec<_> = page.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Axis & Allies", "Citadels"]);
    assert_eq!(count, 3);

    Ok(())
}

/// Tests that the count ignores the window while respecting the filter.
///
/// Expected: Ok with an empty page and the filtered count
#[tokio::test]
async fn count_respects_filter_but_not_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let repo = ListingRepository::<BoardGames>::new(db);
    let (page, count) = repo
        .query(&request(3, 1, "Year", "ASC", Some("a")))
        .await?;

    assert!(page.is_empty());
    assert_eq!(count, 3);

    Ok(())
}
