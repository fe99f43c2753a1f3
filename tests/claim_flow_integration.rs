//! Test de integración del flujo de reclamación completo
//!
//! Necesita PostgreSQL real (TEST_DATABASE_URL), por eso va con #[ignore]:
//!
//!     TEST_DATABASE_URL=postgres://... cargo test -- --ignored

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use industry_directory::controllers::auth_controller::AuthController;
use industry_directory::controllers::claim_controller::ClaimController;
use industry_directory::controllers::company_controller::CompanyController;
use industry_directory::dto::auth_dto::CompanyLoginRequest;
use industry_directory::dto::claim_dto::SubmitClaimRequest;
use industry_directory::dto::company_dto::CreateCompanyRequest;
use industry_directory::models::auth::AdminContext;
use industry_directory::models::claim::ClaimStatus;
use industry_directory::utils::errors::AppError;

async fn test_pool() -> PgPool {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set for integration tests");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}

fn admin() -> AdminContext {
    AdminContext {
        admin_id: Uuid::new_v4(),
        username: Some("test-admin".to_string()),
        is_super_admin: false,
    }
}

fn claim_request(slug: &str, email: &str) -> SubmitClaimRequest {
    SubmitClaimRequest {
        company_slug: slug.to_string(),
        contact_name: "Eva Lind".to_string(),
        contact_email: email.to_string(),
        contact_phone: Some("+46 8 123 456 78".to_string()),
        relationship: "Jag är ägare till företaget".to_string(),
        consent: true,
    }
}

fn company_request(name: String) -> CreateCompanyRequest {
    CreateCompanyRequest {
        name,
        description_sv: Some("Industriservice och svets".to_string()),
        description_en: None,
        categories: Some(vec!["svets".to_string()]),
        service_areas: None,
        specialties: None,
        address: None,
        postal_code: None,
        city: Some("Stockholm".to_string()),
        region: Some("Stockholm".to_string()),
        email: None,
        phone: None,
        website: None,
        is_featured: None,
        is_verified: None,
    }
}

#[tokio::test]
#[ignore]
async fn test_full_claim_flow() {
    let pool = test_pool().await;

    let companies = CompanyController::new(pool.clone());
    let claims = ClaimController::new(pool.clone());
    let auth = AuthController::new(pool.clone());

    // Nombre único por ejecución para no colisionar con runs anteriores
    let suffix = Uuid::new_v4().simple().to_string();
    let email = format!("owner-{}@example.com", suffix);

    let company = companies
        .create(company_request(format!("Rusty Support AB {}", suffix)))
        .await
        .expect("create company");

    // Submission pública → reclamación pendiente
    let submitted = claims
        .submit(claim_request(&company.slug, &email))
        .await
        .expect("submit claim");
    assert_eq!(submitted.status, ClaimStatus::Pending.as_str());

    // Reclamar un slug inexistente es NotFound y no crea nada
    let missing = claims
        .submit(claim_request("no-such-company-slug", &email))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    // Aprobación: CompanyUser + token en una transacción
    let reviewer = admin();
    let approved = claims
        .approve(submitted.claim_id, &reviewer)
        .await
        .expect("approve claim");

    assert_eq!(approved.claim.status, ClaimStatus::Approved.as_str());
    assert!(approved.claim.reviewed_at.is_some());
    assert_eq!(approved.claim.reviewed_by, Some(reviewer.admin_id));
    assert!(approved.access_token.len() > 10);
    assert_eq!(approved.company_user.email, email);
    assert_eq!(approved.company_user.company_id, company.id);

    // Una reclamación revisada no vuelve a transicionar
    let again = claims.approve(submitted.claim_id, &reviewer).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));
    let reject_after = claims.reject(submitted.claim_id, &reviewer, None).await;
    assert!(matches!(reject_after, Err(AppError::Conflict(_))));

    // Una segunda reclamación de la misma empresa no puede aprobarse
    // mientras haya un usuario activo
    let second = claims
        .submit(claim_request(&company.slug, &format!("second-{}", email)))
        .await
        .expect("submit second claim");
    let conflict = claims.approve(second.claim_id, &reviewer).await;
    assert!(matches!(conflict, Err(AppError::Conflict(_))));

    // Login legacy con el token emitido
    let login = auth
        .company_login(CompanyLoginRequest {
            email: email.clone(),
            access_token: approved.access_token.clone(),
        })
        .await
        .expect("company login");
    assert!(login.success);
    assert_eq!(
        login.company_user.expect("company user").company_id,
        company.id
    );

    // Token incorrecto: mismo error genérico que email desconocido
    let wrong_token = auth
        .company_login(CompanyLoginRequest {
            email: email.clone(),
            access_token: "wrong-token".to_string(),
        })
        .await;
    let unknown_email = auth
        .company_login(CompanyLoginRequest {
            email: "nobody@example.com".to_string(),
            access_token: approved.access_token.clone(),
        })
        .await;
    match (wrong_token, unknown_email) {
        (Err(AppError::Unauthorized(a)), Err(AppError::Unauthorized(b))) => assert_eq!(a, b),
        (a, b) => panic!("expected generic auth errors, got ok={}/{}", a.is_ok(), b.is_ok()),
    }

    // Verify con el bearer token
    let verified = auth
        .verify_company_token(&approved.access_token)
        .await
        .expect("verify token");
    assert_eq!(verified.company_id, company.id);
}

#[tokio::test]
#[ignore]
async fn test_reject_creates_no_company_user() {
    let pool = test_pool().await;

    let companies = CompanyController::new(pool.clone());
    let claims = ClaimController::new(pool.clone());
    let auth = AuthController::new(pool.clone());

    let suffix = Uuid::new_v4().simple().to_string();
    let email = format!("rejected-{}@example.com", suffix);

    let company = companies
        .create(company_request(format!("Svets & Smide {}", suffix)))
        .await
        .expect("create company");

    let submitted = claims
        .submit(claim_request(&company.slug, &email))
        .await
        .expect("submit claim");

    let reviewer = admin();
    let rejected = claims
        .reject(submitted.claim_id, &reviewer, Some("Ingen verifierbar koppling".to_string()))
        .await
        .expect("reject claim");

    assert_eq!(rejected.status, ClaimStatus::Rejected.as_str());
    assert_eq!(rejected.review_notes.as_deref(), Some("Ingen verifierbar koppling"));

    // Sin aprobación no hay credencial que verificar
    let login = auth
        .company_login(CompanyLoginRequest {
            email,
            access_token: "anything".to_string(),
        })
        .await;
    assert!(matches!(login, Err(AppError::Unauthorized(_))));
}
