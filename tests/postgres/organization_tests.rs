//! Organization storage against `PostgreSQL`.

use crate::postgres::helpers::{BoxError, TestDatabase, at, database, organization};
use rstest::rstest;
use workboard::{
    app::Repositories,
    email::EmailAddress,
    organization::{
        domain::{
            Organization, OrganizationId, OrganizationName, OrganizationSlug,
            PersistedOrganizationData,
        },
        ports::OrganizationRepositoryError,
        services::{CreateOrganizationRequest, OrganizationServiceError},
    },
};

#[rstest]
fn stored_organizations_are_found_and_listed_oldest_first(
    database: Result<Option<TestDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repos = Repositories::postgres(&db.pool);
    let newest = organization("Gamma Labs", at(20))?;
    let oldest = organization("Alpha Works", at(0))?;
    let contact = EmailAddress::new("hello@beta.example")?;
    let middle = Organization::from_persisted(PersistedOrganizationData {
        id: OrganizationId::new(),
        name: OrganizationName::new("Beta Guild")?,
        slug: OrganizationSlug::parse("beta-guild")?,
        contact_email: Some(contact.clone()),
        created_at: at(10),
    });
    for org in [&newest, &oldest, &middle] {
        db.run(repos.organizations.store(org))?;
    }

    let listed: Vec<String> = db
        .run(repos.organizations.list_all())?
        .iter()
        .map(|org| org.slug().as_str().to_owned())
        .collect();
    let by_id = db.run(repos.organizations.find_by_id(middle.id()))?;
    let by_slug = db.run(
        repos
            .organizations
            .find_by_slug(&OrganizationSlug::parse("beta-guild")?),
    )?;

    assert_eq!(listed, ["alpha-works", "beta-guild", "gamma-labs"]);
    assert_eq!(by_id.as_ref(), Some(&middle));
    assert_eq!(
        by_slug.as_ref().and_then(Organization::contact_email),
        Some(&contact)
    );
    assert!(
        db.run(repos.organizations.find_by_id(OrganizationId::new()))?
            .is_none()
    );
    Ok(())
}

#[rstest]
#[case("Cafe Creme", "Café Crème", "cafe-creme")]
#[case("My Startup", "my startup!", "my-startup")]
fn slug_unique_index_violation_maps_to_duplicate_slug(
    database: Result<Option<TestDatabase>, BoxError>,
    #[case] first: &str,
    #[case] second: &str,
    #[case] shared_slug: &str,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repos = Repositories::postgres(&db.pool);
    db.run(repos.organizations.store(&organization(first, at(0))?))?;

    let result = db.run(repos.organizations.store(&organization(second, at(1))?));

    assert!(
        matches!(
            &result,
            Err(OrganizationRepositoryError::DuplicateSlug(slug)) if slug.as_str() == shared_slug
        ),
        "expected DuplicateSlug, got {result:?}"
    );
    assert_eq!(db.run(repos.organizations.list_all())?.len(), 1);
    Ok(())
}

#[rstest]
fn reused_identifier_maps_to_duplicate_organization(
    database: Result<Option<TestDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let repos = Repositories::postgres(&db.pool);
    let original = organization("Original", at(0))?;
    db.run(repos.organizations.store(&original))?;
    let clash = Organization::from_persisted(PersistedOrganizationData {
        id: original.id(),
        name: OrganizationName::new("Different")?,
        slug: OrganizationSlug::parse("different")?,
        contact_email: None,
        created_at: at(1),
    });

    let result = db.run(repos.organizations.store(&clash));

    assert!(
        matches!(
            result,
            Err(OrganizationRepositoryError::DuplicateOrganization(id)) if id == original.id()
        ),
        "expected DuplicateOrganization, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn service_rejects_similar_names_through_postgres(
    database: Result<Option<TestDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = database? else {
        return Ok(());
    };
    let services = db.services();
    db.run(
        services
            .organizations
            .create(CreateOrganizationRequest::new("Crème Brûlée")),
    )?;

    let result = db.run(
        services
            .organizations
            .create(CreateOrganizationRequest::new("creme brulee")),
    );

    let Err(err) = result else {
        return Err("second organization should be rejected".into());
    };
    assert!(matches!(err, OrganizationServiceError::DuplicateSlug(_)));
    assert_eq!(
        err.to_string(),
        "An organization with a similar name already exists."
    );
    Ok(())
}
