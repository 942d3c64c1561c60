use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::{SectionHeading, SiteContent};
use crate::contact::{ContactError, ContactMessage};
use crate::site::{EMAIL, LOCATION, PHONE};

const TOAST_DURATION: Duration = Duration::from_secs(5);

#[server]
pub async fn send_contact(message: ContactMessage) -> Result<(), ServerFnError> {
    use http::StatusCode;
    use leptos_axum::ResponseOptions;

    if let Err(e) = message.check() {
        tracing::warn!("rejected contact message: {e}");
        if let Some(opts) = use_context::<ResponseOptions>() {
            opts.set_status(StatusCode::BAD_REQUEST);
        }
        return Err(ServerFnError::new(e));
    }
    tracing::info!("contact message from {}", message.summary());
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum Toast {
    Sent,
    Failed(String),
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (toast, set_toast) = signal(None::<Toast>);

    let send = ServerAction::<SendContact>::new();
    let pending = send.pending();

    let show_toast = move |t: Toast| {
        set_toast.set(Some(t));
        set_timeout(move || set_toast.set(None), TOAST_DURATION);
    };

    Effect::watch(
        move || send.value().get(),
        move |result, _, _| match result {
            Some(Ok(())) => {
                for field in [name, email, subject, message] {
                    field.set(String::new());
                }
                show_toast(Toast::Sent);
            }
            Some(Err(e)) => {
                log::warn!("contact form failed: {e}");
                show_toast(Toast::Failed(ContactError::Delivery.to_string()));
            }
            None => {}
        },
        false,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = msg.check() {
            show_toast(Toast::Failed(e.to_string()));
            return;
        }
        send.dispatch(SendContact { message: msg });
    };

    let sent_title = content.t("contact.sent");
    let sent_body = content.t("contact.sentDescription");
    let failed_title = content.t("contact.failed");
    let send_label = content.t("contact.send");
    let sending_label = content.t("contact.sending");

    view! {
        <section id="contact" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    heading=content.t("contact.heading")
                    highlight=content.t("contact.highlight")
                    description=content.t("contact.description")
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 section-content">
                    <div class="space-y-6">
                        <InfoCard icon="extra-mail" label="Email" value=EMAIL href=Some(format!("mailto:{EMAIL}")) />
                        <InfoCard icon="extra-phone" label="Phone" value=PHONE href=Some(format!("tel:{}", PHONE.replace(['(', ')', ' '], ""))) />
                        <InfoCard icon="extra-location" label="Location" value=LOCATION href=None />
                    </div>
                    <form
                        class="space-y-4 p-6 rounded-lg bg-brightBlack/20 border border-muted/30"
                        on:submit=on_submit
                    >
                        <h3 class="text-xl font-bold mb-2">{content.t("contact.formTitle")}</h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <TextField id="contact_name" label=content.t("contact.name") kind="text" value=name />
                            <TextField id="contact_email" label=content.t("contact.email") kind="email" value=email />
                        </div>
                        <TextField id="contact_subject" label=content.t("contact.subject") kind="text" value=subject />
                        <div class="flex flex-col gap-1">
                            <label for="contact_message" class="text-sm font-medium">
                                {content.t("contact.message")}
                            </label>
                            <textarea
                                id="contact_message"
                                rows="6"
                                class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground transition-all duration-200"
                                prop:value=message
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200 disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || {
                                if pending.get() { sending_label.clone() } else { send_label.clone() }
                            }}
                        </button>
                    </form>
                </div>
            </div>
            {move || {
                toast
                    .get()
                    .map(|t| {
                        let (class, title, body) = match t {
                            Toast::Sent => ("border-green text-green", sent_title.clone(), sent_body.clone()),
                            Toast::Failed(reason) => ("border-red text-red", failed_title.clone(), reason),
                        };
                        view! {
                            <div
                                role="status"
                                class=format!(
                                    "fixed bottom-6 left-6 z-50 max-w-sm p-4 rounded-lg bg-background border shadow-lg {class}",
                                )
                            >
                                <p class="font-bold">{title}</p>
                                <p class="text-sm text-foreground">{body}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 rounded-lg bg-brightBlack/20 border border-muted/30">
            <div class="w-12 h-12 flex items-center justify-center rounded-full bg-cyan/20 text-cyan text-xl">
                <i class=icon />
            </div>
            <div>
                <p class="text-sm text-muted">{label}</p>
                {match href {
                    Some(href) => {
                        Either::Left(
                            view! {
                                <a href=href class="font-medium hover:text-cyan transition-colors duration-200">
                                    {value}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(view! { <p class="font-medium">{value}</p> }),
                }}
            </div>
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: String,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <label for=id class="text-sm font-medium">
                {label}
            </label>
            <input
                id=id
                type=kind
                class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground transition-all duration-200"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
