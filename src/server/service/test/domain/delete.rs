use super::*;

/// Tests deleting a domain through the service.
///
/// Expected: Ok with the deleted domain and an empty listing afterwards
#[tokio::test]
async fn deletes_and_invalidates_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Domain).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let model = factory::create_domain(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let base = base_url("Domains");
    let listing = ListingService::<Domains>::new(db, &cache, &settings);

    listing.list(ListingParams::default(), &base).await?;

    let response = DomainService::new(db, &cache, &settings)
        .delete(model.id, &base)
        .await?;

    assert_eq!(response.data.unwrap().id, model.id);
    assert_eq!(response.links[0].method, "DELETE");

    let page = listing.list(ListingParams::default(), &base).await?;
    assert!(page.data.is_empty());
    assert_eq!(page.record_count, Some(0));

    Ok(())
}

/// Tests deleting an unknown domain.
///
/// Expected: Ok with null data
#[tokio::test]
async fn returns_null_data_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Domain).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();

    let response = DomainService::new(db, &cache, &settings)
        .delete(404, &base_url("Domains"))
        .await?;

    assert!(response.data.is_none());

    Ok(())
}
