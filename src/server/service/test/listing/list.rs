use super::*;

/// Tests listing the first page of board games by name.
///
/// Verifies the page contents, the echoed window, the pre-window record count, and
/// the self link rebuilt from the validated request.
///
/// Expected: Ok with two games and a record count of three
#[tokio::test]
async fn lists_first_page_with_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);

    let response = service
        .list(params(0, 2, "Name", "ASC"), &base_url("BoardGames"))
        .await?;

    let names: Vec<_> = response.data.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Axis & Allies", "Citadels"]);
    assert_eq!(response.page_index, Some(0));
    assert_eq!(response.page_size, Some(2));
    assert_eq!(response.record_count, Some(3));
    assert_eq!(response.links.len(), 1);
    assert_eq!(
        response.links[0].href,
        "http://localhost:8080/BoardGames?pageIndex=0&pageSize=2&sortColumn=Name&sortOrder=ASC"
    );
    assert_eq!(response.links[0].rel, "self");
    assert_eq!(response.links[0].method, "GET");

    Ok(())
}

/// Tests that the record count ignores the paging window.
///
/// Expected: Ok with the same record count for every page, including empty ones
#[tokio::test]
async fn record_count_is_independent_of_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);
    let base = base_url("BoardGames");

    for (page_index, page_size, expected_len) in [(0, 1, 1), (1, 2, 1), (0, 100, 3), (9, 10, 0)] {
        let response = service
            .list(params(page_index, page_size, "Year", "DESC"), &base)
            .await?;

        assert_eq!(response.data.len(), expected_len);
        assert_eq!(response.record_count, Some(3));
    }

    Ok(())
}

/// Tests that omitted parameters fall back to their defaults.
///
/// Expected: Ok with page 0, size 10, sorted by name ascending
#[tokio::test]
async fn applies_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);

    let response = service
        .list(ListingParams::default(), &base_url("BoardGames"))
        .await?;

    assert_eq!(response.page_index, Some(0));
    assert_eq!(response.page_size, Some(10));
    assert_eq!(response.data[0].name, "Axis & Allies");

    Ok(())
}

/// Tests that an unsupported sort column is rejected before any query runs.
///
/// The database has no tables, so reaching the repository would fail with a
/// database error instead of a validation error.
///
/// Expected: Err(AppError::Validation) with status 422
#[tokio::test]
async fn rejects_unknown_sort_column_without_querying() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);

    let result = service
        .list(params(0, 10, "DROP TABLE", "ASC"), &base_url("BoardGames"))
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.status(), StatusCode::UNPROCESSABLE_ENTITY);
            assert!(errors.has_field("SortColumn"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|r| r.data)),
    }
    assert!(cache.is_empty());
}

/// Tests that an out-of-range page size is rejected.
///
/// Expected: Err(AppError::Validation) with status 400
#[tokio::test]
async fn rejects_page_size_out_of_range() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<Domains>::new(db, &cache, &settings);

    let result = service
        .list(params(0, 101, "Name", "ASC"), &base_url("Domains"))
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.status(), StatusCode::BAD_REQUEST);
            assert!(errors.has_field("PageSize"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|r| r.data)),
    }
}

/// Tests that a repeated request within the TTL is served from the cache.
///
/// An out-of-band insert changes the table between the two calls. The cached page
/// is returned unchanged while the record count reflects the insert.
///
/// Expected: Ok with identical data and an updated record count
#[tokio::test]
async fn serves_cached_data_with_fresh_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);
    let base = base_url("BoardGames");

    let first = service.list(params(0, 10, "Name", "ASC"), &base).await?;

    factory::board_game::BoardGameFactory::new(db)
        .name("Agricola")
        .build()
        .await?;

    let second = service.list(params(0, 10, "Name", "ASC"), &base).await?;

    assert_eq!(
        serde_json::to_vec(&first.data)?,
        serde_json::to_vec(&second.data)?
    );
    assert_eq!(first.record_count, Some(3));
    assert_eq!(second.record_count, Some(4));
    assert_eq!(cache.len(), 1);

    Ok(())
}

/// Tests that equivalent requests share one cache entry.
///
/// Expected: Ok with a single cached page for "asc" and "ASC"
#[tokio::test]
async fn normalizes_sort_order_for_caching() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);
    let base = base_url("BoardGames");

    service.list(params(0, 10, "Name", "asc"), &base).await?;
    service.list(params(0, 10, "Name", "ASC"), &base).await?;
    service.list(params(1, 10, "Name", "ASC"), &base).await?;

    assert_eq!(cache.len(), 2);

    Ok(())
}

/// Tests that a zero TTL bypasses the cache.
///
/// Expected: Ok with the out-of-band insert visible on the second call and nothing
/// stored
#[tokio::test]
async fn zero_ttl_always_queries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings {
        cache_ttl: Duration::ZERO,
        ..ListingSettings::default()
    };
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);
    let base = base_url("BoardGames");

    service.list(params(0, 10, "Name", "ASC"), &base).await?;
    factory::board_game::BoardGameFactory::new(db)
        .name("Agricola")
        .build()
        .await?;
    let second = service.list(params(0, 10, "Name", "ASC"), &base).await?;

    assert_eq!(second.data.len(), 4);
    assert_eq!(second.data[0].name, "Agricola");
    assert_eq!(second.record_count, Some(4));
    assert!(cache.is_empty());

    Ok(())
}

/// Tests that a data-source failure propagates and is not cached.
///
/// Expected: Err(AppError::DbErr) and an empty cache
#[tokio::test]
async fn propagates_database_errors() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);

    let result = service
        .list(params(0, 10, "Name", "ASC"), &base_url("BoardGames"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(cache.is_empty());
}

/// Tests that a query exceeding the timeout fails as unavailable.
///
/// Expected: Err(AppError::Timeout)
#[tokio::test]
async fn times_out_slow_queries() {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = ListingCache::new(100);
    let settings = ListingSettings {
        query_timeout: Duration::ZERO,
        ..ListingSettings::default()
    };
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);

    let result = service
        .list(params(0, 10, "Name", "ASC"), &base_url("BoardGames"))
        .await;

    assert!(matches!(result, Err(AppError::Timeout(_))));
}

/// Tests filtering through the service.
///
/// Expected: Ok with matching data and a filtered record count
#[tokio::test]
async fn filters_data_and_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(BoardGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_games(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let service = ListingService::<BoardGames>::new(db, &cache, &settings);

    let response = service
        .list(
            ListingParams {
                filter_query: Some("mars".to_string()),
                ..ListingParams::default()
            },
            &base_url("BoardGames"),
        )
        .await?;

    assert_eq!(response.record_count, Some(1));
    assert_eq!(response.data[0].name, "Terraforming Mars");
    assert!(response.links[0].href.ends_with("&filterQuery=mars"));

    Ok(())
}
