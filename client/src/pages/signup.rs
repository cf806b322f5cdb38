//! Signup panel with inline, field-keyed validation errors.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::signup::{FieldErrors, ROLE_OPTIONS, SignupField, SignupForm};

#[component]
pub fn SignupPanel(on_switch: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        match session.try_update(|s| s.signup(&current).map(|_| ())) {
            Some(Ok(())) => errors.set(FieldErrors::new()),
            Some(Err(found)) => {
                log::debug!("signup refused with {} field errors", found.len());
                errors.set(found);
            }
            None => log::warn!("session signal disposed before signup"),
        }
    };

    view! {
        <p class="login-card__subtitle">"Create your account"</p>
        <form class="login-form" on:submit=on_submit novalidate>
            <SignupInput
                field=SignupField::Name
                placeholder="Full name"
                errors=errors
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
            />
            <SignupInput
                field=SignupField::Email
                input_type="email"
                placeholder="you@example.com"
                errors=errors
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
            />
            <input
                class="login-input"
                type="text"
                placeholder="Company (optional)"
                prop:value=move || form.with(|f| f.company.clone())
                on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
            />
            <select
                class="login-input"
                id=SignupField::Role.key()
                class:login-input--invalid=move || errors.with(|e| e.contains_key(&SignupField::Role))
                prop:value=move || form.with(|f| f.role.clone())
                on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
            >
                <option value="">"Select your role"</option>
                {ROLE_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value={*value}>{*label}</option> })
                    .collect_view()}
            </select>
            <FieldError field=SignupField::Role errors=errors/>
            <SignupInput
                field=SignupField::Password
                input_type="password"
                placeholder="Password (8+ characters)"
                errors=errors
                value=Signal::derive(move || form.with(|f| f.password.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
            />
            <SignupInput
                field=SignupField::ConfirmPassword
                input_type="password"
                placeholder="Confirm password"
                errors=errors
                value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.confirm_password = v))
            />
            <label class="login-check">
                <input
                    type="checkbox"
                    id=SignupField::Terms.key()
                    prop:checked=move || form.with(|f| f.accept_terms)
                    on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                />
                "I agree to the Terms of Service and Privacy Policy"
            </label>
            <FieldError field=SignupField::Terms errors=errors/>
            <button class="login-button" type="submit">
                "Create Account"
            </button>
        </form>
        <p class="login-card__footer">
            "Already have an account? "
            <button type="button" class="login-link" on:click=move |_| on_switch.run(())>
                "Sign in"
            </button>
        </p>
    }
}

#[component]
fn SignupInput(
    field: SignupField,
    placeholder: &'static str,
    errors: RwSignal<FieldErrors>,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="login-input"
            class:login-input--invalid=move || errors.with(|e| e.contains_key(&field))
            id=field.key()
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
        <FieldError field=field errors=errors/>
    }
}

#[component]
fn FieldError(field: SignupField, errors: RwSignal<FieldErrors>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(&field).copied())
            .map(|message| view! { <p class="login-message login-message--error">{message}</p> })
    }
}
