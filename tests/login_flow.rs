//! End-to-end login/logout flows against the three sample pages
//!
//! Mirrors the sample application's behaviour: an anonymous visitor sees
//! the error class on the secured and admin pages, everyone sees the
//! public message, "user" unlocks the secured page, "admin" unlocks the
//! admin page, and logging out drops the principal again.

use portcullis::prelude::*;

struct Harness {
    engine: AccessDecisionEngine,
    manager: SessionManager<MemorySessionStore>,
    provider: DirectoryProvider,
    renderer: HtmlRenderer,
}

impl Harness {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let directory = UserDirectory::new()
            .with_account(UserAccount::new("user", "user", ["user"]).unwrap())
            .with_account(UserAccount::new("admin", "admin", ["user", "admin"]).unwrap());

        Self {
            engine: AccessDecisionEngine::new(),
            manager: SessionManager::new(MemorySessionStore::new()),
            provider: DirectoryProvider::new(directory),
            renderer: HtmlRenderer::new(),
        }
    }

    /// Render a page for the session behind `token`, as the app would
    async fn visit(&self, token: Option<&str>, page: &str) -> String {
        let principal = match token {
            Some(token) => self.manager.principal(token).await.unwrap(),
            None => None,
        };
        let decision = self.engine.evaluate_named(page, principal.as_ref()).unwrap();
        self.renderer.render(&decision)
    }
}

#[tokio::test]
async fn secured_page_shows_error_when_anonymous() {
    let harness = Harness::new();

    let html = harness.visit(None, "secured").await;
    assert!(html.contains("class=\"error\""));
    assert!(html.contains("403 Forbidden"));
}

#[tokio::test]
async fn admin_page_shows_error_when_anonymous() {
    let harness = Harness::new();

    let html = harness.visit(None, "admin").await;
    assert!(html.contains("class=\"error\""));
    assert!(html.contains("403 Forbidden"));
}

#[tokio::test]
async fn public_page_always_shows_message() {
    let harness = Harness::new();

    // Anonymous
    let html = harness.visit(None, "public").await;
    assert!(html.contains("class=\"message\""));
    assert!(html.contains("Message: public"));

    // Logged in
    let token = harness.manager.login(&harness.provider, "user", "user").await.unwrap();
    let html = harness.visit(Some(&token), "public").await;
    assert!(html.contains("Message: public"));
}

#[tokio::test]
async fn admin_with_auth_and_role_sees_admin_page() {
    let harness = Harness::new();

    let token = harness.manager.login(&harness.provider, "admin", "admin").await.unwrap();

    let html = harness.visit(Some(&token), "admin").await;
    assert!(html.contains("class=\"message\""));
    assert!(html.contains("Message: admin"));

    harness.manager.logout(&token).await.unwrap();
}

#[tokio::test]
async fn user_with_auth_and_role_sees_secured_page() {
    let harness = Harness::new();

    let token = harness.manager.login(&harness.provider, "user", "user").await.unwrap();

    let html = harness.visit(Some(&token), "secured").await;
    assert!(html.contains("class=\"message\""));
    assert!(html.contains("Message: secured"));

    harness.manager.logout(&token).await.unwrap();
}

#[tokio::test]
async fn user_without_admin_role_is_denied_admin_page() {
    let harness = Harness::new();

    let token = harness.manager.login(&harness.provider, "user", "user").await.unwrap();

    let html = harness.visit(Some(&token), "admin").await;
    assert!(html.contains("class=\"error\""));
}

#[tokio::test]
async fn logout_returns_visitor_to_anonymous() {
    let harness = Harness::new();

    let token = harness.manager.login(&harness.provider, "user", "user").await.unwrap();
    assert!(harness.visit(Some(&token), "secured").await.contains("class=\"message\""));

    harness.manager.logout(&token).await.unwrap();
    assert!(harness.visit(Some(&token), "secured").await.contains("class=\"error\""));
}

#[tokio::test]
async fn engine_built_from_config_honors_custom_roles() {
    let config = {
        let mut config = PortcullisConfig::default();
        config.access.secured_role = "member".to_string();
        config
    };
    let engine = AccessDecisionEngine::from_config(&config);

    let user = Principal::new("user").with_role("user");
    let member = Principal::new("carol").with_role("member");

    assert!(!engine.evaluate(Resource::Secured, Some(&user)).granted);
    assert!(engine.evaluate(Resource::Secured, Some(&member)).granted);
}
