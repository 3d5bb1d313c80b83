//! Organization scoping of project listings.
//!
//! Scoping is a convenience filter keyed by slug; knowing a project id is
//! enough to read it directly.

use super::helpers::{organization, project, services};
use rstest::rstest;
use workboard::app::AppServices;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_never_mix_tenants(services: AppServices) -> Result<(), eyre::Report> {
    organization(&services, "Alpha").await?;
    organization(&services, "Beta").await?;
    let alpha_one = project(&services, "A1", "alpha").await?;
    project(&services, "B1", "beta").await?;
    let alpha_two = project(&services, "A2", "alpha").await?;

    let alpha = services.projects.list_for_organization("alpha").await?;

    assert_eq!(alpha, vec![alpha_one, alpha_two]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn direct_lookup_by_id_is_not_tenant_scoped(
    services: AppServices,
) -> Result<(), eyre::Report> {
    organization(&services, "Beta").await?;
    let beta_project = project(&services, "B1", "beta").await?;

    let fetched = services.projects.find(beta_project.id()).await?;

    assert_eq!(fetched, beta_project);
    Ok(())
}
