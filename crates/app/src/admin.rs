//! Administrative section served behind the edge gate
//!
//! - GET /admin/login: sign-in form (the only page reachable without an admin credential)
//! - GET /admin      : dashboard counts

use axum::{
    extract::{FromRef, State},
    response::Html,
    routing::get,
    Router,
};
use carepath_accounts::AccountsRepositories;
use carepath_auth::{AdminUser, AuthBackend};
use carepath_common::{Result, Success};
use carepath_contact::ContactRepositories;
use carepath_payments::PaymentsRepositories;
use carepath_quizzes::QuizRepositories;
use serde::Serialize;
use sqlx::PgPool;

/// State for the admin pages: read access to every domain
#[derive(Clone)]
pub struct AdminState {
    pub accounts: AccountsRepositories,
    pub quizzes: QuizRepositories,
    pub payments: PaymentsRepositories,
    pub contact: ContactRepositories,
    pub auth: AuthBackend,
}

impl AdminState {
    pub fn new(pool: PgPool, auth: AuthBackend) -> Self {
        Self {
            accounts: AccountsRepositories::new(pool.clone()),
            quizzes: QuizRepositories::new(pool.clone()),
            payments: PaymentsRepositories::new(pool.clone()),
            contact: ContactRepositories::new(pool),
            auth,
        }
    }
}

impl FromRef<AdminState> for AuthBackend {
    fn from_ref(state: &AdminState) -> Self {
        state.auth.clone()
    }
}

pub fn routes() -> Router<AdminState> {
    Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/login", get(login_page))
}

#[derive(Debug, Serialize)]
pub struct DashboardCounts {
    pub users: i64,
    pub subscriptions: i64,
    pub quiz_submissions: i64,
    pub payments: i64,
    pub unhandled_contact_messages: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardEnvelope {
    pub dashboard: DashboardCounts,
}

/// GET /admin
async fn dashboard(
    AdminUser(_admin): AdminUser,
    State(state): State<AdminState>,
) -> Result<Success<DashboardEnvelope>> {
    let (users, subscriptions, quiz_submissions, payments, unhandled_contact_messages) = tokio::try_join!(
        state.accounts.users.count(),
        state.accounts.subscriptions.count(),
        state.quizzes.submissions.count(),
        state.payments.payments.count(),
        state.contact.messages.count_unhandled(),
    )?;

    Ok(Success::new(DashboardEnvelope {
        dashboard: DashboardCounts {
            users,
            subscriptions,
            quiz_submissions,
            payments,
            unhandled_contact_messages,
        },
    }))
}

/// GET /admin/login
async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

// Posts JSON to the login API, then follows `?redirect=` when it stays inside /admin.
const LOGIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Carepath Admin - Sign in</title>
</head>
<body>
  <main>
    <h1>Carepath Admin</h1>
    <form id="login">
      <label>Email <input name="email" type="email" autocomplete="username" required></label>
      <label>Password <input name="password" type="password" autocomplete="current-password" required></label>
      <button type="submit">Sign in</button>
      <p id="error" role="alert" hidden></p>
    </form>
  </main>
  <script>
    document.getElementById("login").addEventListener("submit", async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const response = await fetch("/api/auth/login", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        credentials: "same-origin",
        body: JSON.stringify({ email: form.get("email"), password: form.get("password") }),
      });
      if (!response.ok) {
        const body = await response.json().catch(() => ({}));
        const error = document.getElementById("error");
        error.textContent = body.error || "Sign-in failed";
        error.hidden = false;
        return;
      }
      const target = new URLSearchParams(window.location.search).get("redirect") || "/admin";
      window.location.assign(target === "/admin" || target.startsWith("/admin/") ? target : "/admin");
    });
  </script>
</body>
</html>
"#;
