use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    validate_email, validate_message, validate_name, ContactMessage, FieldError, SubmitStatus,
    STATUS_RESET_MS,
};

use super::toast::ToastQueue;

const WHATSAPP_LINK: &str = "https://wa.me/+27606249151?text=Hi%20Tafara%2C%20I%20found%20your%20portfolio%20website%20and%20would%20like%20to%20connect!";

#[server]
pub async fn send_message(msg: ContactMessage) -> Result<(), ServerFnError> {
    // The browser blocks invalid input before dispatching; never trust it.
    msg.validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    // TODO: hand off to an email relay; for now inquiries land in the server log.
    tracing::info!(
        name = %msg.name.trim(),
        email = %msg.email.trim(),
        "contact message received"
    );
    tracing::debug!(message = %msg.message.trim(), "contact message body");
    Ok(())
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (name_touched, set_name_touched) = signal(false);
    let (email_touched, set_email_touched) = signal(false);
    let (message_touched, set_message_touched) = signal(false);
    let (status, set_status) = signal(SubmitStatus::Idle);

    let name_error = Memo::new(move |_| validate_name(&name.get()).err());
    let email_error = Memo::new(move |_| validate_email(&email.get()).err());
    let message_error = Memo::new(move |_| validate_message(&message.get()).err());

    let send = ServerAction::<SendMessage>::new();
    let toasts = expect_context::<ToastQueue>();

    let UseTimeoutFnReturn {
        start: start_status_reset,
        ..
    } = use_timeout_fn(
        move |_: ()| set_status.set(SubmitStatus::Idle),
        STATUS_RESET_MS,
    );

    Effect::new(move |_| {
        let Some(result) = send.value().get() else {
            return;
        };
        match result {
            Ok(()) => {
                set_status.set(SubmitStatus::Sent);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
                set_name_touched.set(false);
                set_email_touched.set(false);
                set_message_touched.set(false);
                toasts.success("Message sent successfully!");
            }
            Err(err) => {
                log::error!("contact message failed to send: {err}");
                set_status.set(SubmitStatus::Failed);
                toasts.error("Failed to send message. Please try again.");
            }
        }
        start_status_reset(());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_name_touched.set(true);
        set_email_touched.set(true);
        set_message_touched.set(true);
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if msg.validate().is_err() {
            return;
        }
        set_status.set(SubmitStatus::Sending);
        send.dispatch(SendMessage { msg });
    };

    let button_label = move || match status.get() {
        SubmitStatus::Idle => "Send Message",
        SubmitStatus::Sending => "Sending...",
        SubmitStatus::Sent => "Message Sent!",
        SubmitStatus::Failed => "Try Again",
    };

    view! {
        <section id="contact" class="py-20 md:py-32">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    <div class="md:col-span-1">
                        <h2 class="text-4xl md:text-5xl font-bold mb-8 tracking-tighter">"CONTACT"</h2>

                        <div class="space-y-6">
                            <div>
                                <h3 class="text-xl font-medium mb-2">"Email"</h3>
                                <a
                                    href="mailto:mutsvedu.work@gmail.com"
                                    class="text-stone-600 dark:text-stone-400 hover:text-stone-900 dark:hover:text-stone-100 transition-colors"
                                >
                                    "mutsvedu.work@gmail.com"
                                </a>
                            </div>

                            <div>
                                <h3 class="text-xl font-medium mb-2">"Phone"</h3>
                                <div class="flex items-center gap-4">
                                    <a
                                        href="tel:+27606249151"
                                        class="text-stone-600 dark:text-stone-400 hover:text-stone-900 dark:hover:text-stone-100 transition-colors"
                                    >
                                        "+27 60 624 9151"
                                    </a>
                                    <a
                                        href=WHATSAPP_LINK
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-green-600 hover:text-green-700 transition-colors"
                                    >
                                        "WhatsApp"
                                    </a>
                                </div>
                            </div>

                            <div>
                                <h3 class="text-xl font-medium mb-2">"Location"</h3>
                                <p class="text-stone-600 dark:text-stone-400">"Midrand, South Africa"</p>
                            </div>

                            <div>
                                <h3 class="text-xl font-medium mb-2">"Connect"</h3>
                                <div class="flex space-x-4">
                                    <a
                                        href="https://github.com/Tafaraa"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-stone-600 dark:text-stone-400 hover:text-stone-900 dark:hover:text-stone-100 transition-colors"
                                    >
                                        "GitHub"
                                    </a>
                                    <a
                                        href="https://www.linkedin.com/in/tafara-mutsvedu-93825621b"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-stone-600 dark:text-stone-400 hover:text-stone-900 dark:hover:text-stone-100 transition-colors"
                                    >
                                        "LinkedIn"
                                    </a>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="md:col-span-2">
                        <form on:submit=on_submit class="space-y-8" novalidate>
                            <FormField
                                id="name"
                                label="Your Name"
                                error=Signal::derive(move || {
                                    name_touched.get().then(|| name_error.get()).flatten()
                                })
                            >
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    prop:value=name
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    on:blur=move |_| set_name_touched.set(true)
                                    class="w-full px-0 py-4 bg-transparent border-b-2 border-stone-300 focus:border-stone-900 dark:focus:border-stone-100 focus:outline-none transition-colors"
                                />
                            </FormField>

                            <FormField
                                id="email"
                                label="Your Email"
                                error=Signal::derive(move || {
                                    email_touched.get().then(|| email_error.get()).flatten()
                                })
                            >
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    on:blur=move |_| set_email_touched.set(true)
                                    class="w-full px-0 py-4 bg-transparent border-b-2 border-stone-300 focus:border-stone-900 dark:focus:border-stone-100 focus:outline-none transition-colors"
                                />
                            </FormField>

                            <FormField
                                id="message"
                                label="Message"
                                error=Signal::derive(move || {
                                    message_touched.get().then(|| message_error.get()).flatten()
                                })
                            >
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    prop:value=message
                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                    on:blur=move |_| set_message_touched.set(true)
                                    class="w-full px-0 py-4 bg-transparent border-b-2 border-stone-300 focus:border-stone-900 dark:focus:border-stone-100 focus:outline-none transition-colors"
                                ></textarea>
                            </FormField>

                            <button
                                type="submit"
                                prop:disabled=move || status.get() == SubmitStatus::Sending
                                class="inline-block border border-stone-900 dark:border-stone-100 px-8 py-4 text-stone-900 dark:text-stone-100 hover:bg-stone-900 hover:text-stone-100 transition-colors disabled:opacity-50"
                            >
                                {button_label}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    error: Signal<Option<FieldError>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-xl font-medium mb-2">
                {label}
            </label>
            {children()}
            {move || {
                error
                    .get()
                    .map(|e| view! { <p class="text-red-600 text-sm mt-2">{e.to_string()}</p> })
            }}
        </div>
    }
}
