use super::*;

/// Tests deleting a board game through the service.
///
/// Expected: Ok with the deleted game, a DELETE self link, and the listing refreshed
#[tokio::test]
async fn deletes_and_invalidates_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::create_board_game(db).await?;
    factory::create_board_game(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let base = base_url("BoardGames");
    let listing = ListingService::<BoardGames>::new(db, &cache, &settings);

    listing.list(ListingParams::default(), &base).await?;

    let response = BoardGameService::new(db, &cache, &settings)
        .delete(game.id, &base)
        .await?;

    assert_eq!(response.data.unwrap().id, game.id);
    assert_eq!(response.links[0].method, "DELETE");
    assert!(cache.is_empty());

    let page = listing.list(ListingParams::default(), &base).await?;
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.record_count, Some(1));

    Ok(())
}

/// Tests that deleting an unknown board game leaves the cache alone.
///
/// Expected: Ok with null data and the cached page kept
#[tokio::test]
async fn unknown_id_keeps_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_board_game(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let base = base_url("BoardGames");

    ListingService::<BoardGames>::new(db, &cache, &settings)
        .list(ListingParams::default(), &base)
        .await?;

    let response = BoardGameService::new(db, &cache, &settings)
        .delete(404, &base)
        .await?;

    assert!(response.data.is_none());
    assert_eq!(cache.len(), 1);

    Ok(())
}
