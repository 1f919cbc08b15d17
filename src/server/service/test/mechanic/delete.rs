use super::*;

/// Tests deleting a mechanic through the service.
///
/// Expected: Ok with the deleted mechanic and an empty listing afterwards
#[tokio::test]
async fn deletes_and_invalidates_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Mechanic).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let model = factory::create_mechanic(db).await?;

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();
    let base = base_url("Mechanics");
    let listing = ListingService::<Mechanics>::new(db, &cache, &settings);

    listing.list(ListingParams::default(), &base).await?;

    let response = MechanicService::new(db, &cache, &settings)
        .delete(model.id, &base)
        .await?;

    assert_eq!(response.data.unwrap().id, model.id);
    assert_eq!(response.links[0].method, "DELETE");

    let page = listing.list(ListingParams::default(), &base).await?;
    assert!(page.data.is_empty());
    assert_eq!(page.record_count, Some(0));

    Ok(())
}

/// Tests deleting an unknown mechanic.
///
/// Expected: Ok with null data
#[tokio::test]
async fn returns_null_data_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Mechanic).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = ListingCache::new(100);
    let settings = ListingSettings::default();

    let response = MechanicService::new(db, &cache, &settings)
        .delete(404, &base_url("Mechanics"))
        .await?;

    assert!(response.data.is_none());

    Ok(())
}
