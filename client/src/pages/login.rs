//! Unauthenticated view: login and signup panels behind one toggle.
//!
//! Any non-blank email/password pair opens a demo session; signup validates
//! its fields first and then logs in the same way.

use leptos::prelude::*;

use crate::pages::signup::SignupPanel;
use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());
    let show_login = Callback::new(move |()| mode.set(AuthMode::Login));
    let show_signup = Callback::new(move |()| mode.set(AuthMode::Signup));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CRM Dashboard"</h1>
                {move || match mode.get() {
                    AuthMode::Login => view! { <LoginPanel on_switch=show_signup/> }.into_any(),
                    AuthMode::Signup => view! { <SignupPanel on_switch=show_login/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginPanel(on_switch: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let outcome = session.try_update(|s| s.login(&email_value, &password_value).map(|_| ()));
        match outcome {
            Some(Err(err)) => info.set(err.message().to_owned()),
            Some(Ok(())) => {
                if remember.get_untracked() {
                    log::debug!("remember-me requested; sessions are not persisted");
                }
            }
            None => log::warn!("session signal disposed before login"),
        }
    };

    view! {
        <p class="login-card__subtitle">"Sign in to your account"</p>
        <form class="login-form" on:submit=on_submit>
            <input
                class="login-input"
                type="email"
                placeholder="you@example.com"
                required
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="password"
                placeholder="Password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <div class="login-form__row">
                <label class="login-check">
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <a href="#" class="login-link" on:click=move |ev| ev.prevent_default()>
                    "Forgot password?"
                </a>
            </div>
            <button class="login-button" type="submit">
                "Sign In"
            </button>
        </form>
        <Show when=move || !info.get().is_empty()>
            <p class="login-message">{move || info.get()}</p>
        </Show>
        <p class="login-card__footer">
            "Don't have an account? "
            <button type="button" class="login-link" on:click=move |_| on_switch.run(())>
                "Sign up"
            </button>
        </p>
    }
}
