//! Account registration for clients and legal professionals.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::identity::HttpIdentityProvider;
use crate::net::types::{LawyerDetails, MIN_PASSWORD_LEN, RegisterRequest};
use crate::state::session::{Role, SessionContext};
use crate::util::guard::LOGIN_PATH;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RegisterFormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Years of experience must be a whole number")]
    InvalidExperience,
}

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub bar_number: String,
    pub specialization: String,
    pub years_of_experience: String,
}

fn required(value: &str, field: &'static str) -> Result<String, RegisterFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RegisterFormError::Missing(field));
    }
    Ok(value.to_owned())
}

impl RegisterForm {
    /// Validate the fields and build the provider request.
    ///
    /// Lawyer details are only read (and only required) for `Role::Lawyer`.
    pub(crate) fn validate(&self) -> Result<RegisterRequest, RegisterFormError> {
        let full_name = required(&self.full_name, "Full name")?;
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(RegisterFormError::Missing("Password"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterFormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(RegisterFormError::PasswordMismatch);
        }

        let lawyer = match self.role {
            Role::Client => None,
            Role::Lawyer => Some(LawyerDetails {
                bar_number: required(&self.bar_number, "Bar license number")?,
                specialization: required(&self.specialization, "Specialization")?,
                years_of_experience: required(&self.years_of_experience, "Years of experience")?
                    .parse()
                    .map_err(|_| RegisterFormError::InvalidExperience)?,
            }),
        };

        Ok(RegisterRequest { full_name, email, password: self.password.clone(), role: self.role, lawyer })
    }
}

pub(crate) const REGISTER_FAILED: &str = "Failed to create an account. Please try again.";
pub(crate) const ACCOUNT_EXISTS: &str = "An account already exists for this email.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let provider = expect_context::<HttpIdentityProvider>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let request = match form.with(RegisterForm::validate) {
            Ok(request) => request,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::identity::IdentityError;
            use crate::state::flags::{remember_role, restore_role};

            let flags = session.flags();
            let provider = provider.clone();
            let navigate = navigate.clone();
            let previous_role = remember_role(&flags, request.role);
            leptos::task::spawn_local(async move {
                match provider.register(&request).await {
                    Ok(_) => {
                        busy.set(false);
                        navigate(crate::util::guard::LANDING_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        restore_role(&flags, previous_role);
                        let message = if e == IdentityError::AccountExists { ACCOUNT_EXISTS } else { REGISTER_FAILED };
                        error.set(message.to_owned());
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, &provider);
        }
    };

    let is_lawyer = move || form.with(|f| f.role == Role::Lawyer);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create an account"</h1>
                <p class="auth-card__subtitle">
                    "Enter your information to create your LegalCloud Advisor account"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>
                    <TextField label="Full Name" id="full-name" placeholder="John Doe" form=form
                        get=|f| f.full_name.clone() set=|f, v| f.full_name = v/>
                    <TextField label="Email" id="email" input_type="email" placeholder="name@example.com" form=form
                        get=|f| f.email.clone() set=|f, v| f.email = v/>
                    <TextField label="Password" id="password" input_type="password" form=form
                        get=|f| f.password.clone() set=|f, v| f.password = v/>
                    <TextField label="Confirm Password" id="confirm-password" input_type="password" form=form
                        get=|f| f.confirm_password.clone() set=|f, v| f.confirm_password = v/>

                    <fieldset class="auth-form__roles">
                        <legend class="auth-form__label">"I am registering as:"</legend>
                        <label class="auth-form__radio">
                            <input
                                type="radio"
                                name="role"
                                value="client"
                                prop:checked=move || !is_lawyer()
                                on:change=move |_| form.update(|f| f.role = Role::Client)
                            />
                            "A client seeking legal advice"
                        </label>
                        <label class="auth-form__radio">
                            <input
                                type="radio"
                                name="role"
                                value="lawyer"
                                prop:checked=is_lawyer
                                on:change=move |_| form.update(|f| f.role = Role::Lawyer)
                            />
                            "A legal professional"
                        </label>
                    </fieldset>

                    <Show when=is_lawyer>
                        <TextField label="Bar License Number" id="bar-number" placeholder="e.g., 123456" form=form
                            get=|f| f.bar_number.clone() set=|f, v| f.bar_number = v/>
                        <TextField label="Specialization" id="specialization" placeholder="e.g., Family Law, Corporate Law"
                            form=form get=|f| f.specialization.clone() set=|f, v| f.specialization = v/>
                        <TextField label="Years of Experience" id="experience" input_type="number" placeholder="e.g., 5"
                            form=form get=|f| f.years_of_experience.clone() set=|f, v| f.years_of_experience = v/>
                    </Show>

                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

/// Labelled input bound to one field of the registration form.
#[component]
fn TextField(
    label: &'static str,
    id: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    form: RwSignal<RegisterForm>,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <label class="auth-form__label" for=id>{label}</label>
        <input
            id=id
            class="auth-form__input"
            type=input_type
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}
