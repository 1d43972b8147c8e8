// web_app/pages/contact.rs - Contact form and office details
//
// The form is sent to the submit_contact server function. A successful
// submission opens a confirmation dialog; closing it resets the form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::{Button, ErrorDisplay, ModalWrapper, TextInput};
use crate::web_app::model::ContactMessage;
use crate::web_app::server_fns::SubmitContact;

const OFFICES: [(&str, &str, &str); 3] = [
    ("Visit Us", "123 Real Estate Ave, Suite 100", "New York, NY 10001"),
    ("Call Us", "(555) 123-4567", "Mon-Fri, 9am-6pm"),
    ("Email Us", "info@estateease.com", "We reply within one business day"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submit = ServerAction::<SubmitContact>::new();
    let pending = submit.pending();
    let result = submit.value();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = ContactMessage {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        submit.dispatch(SubmitContact { message: payload });
    };

    let close_dialog = Callback::new(move |_| {
        result.set(None);
        for field in [first_name, last_name, email, phone, subject, message] {
            field.set(String::new());
        }
    });

    view! {
        <Title text="Contact Us | EstateEase" />

        <div class="container mx-auto px-4 py-12">
            <div class="mb-12 text-center">
                <h1 class="mb-2 text-4xl font-bold">"Get in Touch"</h1>
                <p class="text-muted-foreground">"Questions about a listing or selling your home? We are here to help."</p>
            </div>

            <div class="grid gap-8 lg:grid-cols-3">
                <div class="space-y-4">
                    {OFFICES.iter().map(|(title, line1, line2)| view! {
                        <div class="rounded-lg border bg-card p-6">
                            <h3 class="mb-2 font-semibold">{*title}</h3>
                            <p class="text-sm">{*line1}</p>
                            <p class="text-sm text-muted-foreground">{*line2}</p>
                        </div>
                    }).collect_view()}
                </div>

                <form on:submit=on_submit class="space-y-4 rounded-lg border bg-card p-6 lg:col-span-2">
                    <div class="grid gap-4 sm:grid-cols-2">
                        <TextInput value=first_name id="first-name" label="First Name" required=true />
                        <TextInput value=last_name id="last-name" label="Last Name" required=true />
                        <TextInput value=email id="email" label="Email" input_type="email" required=true />
                        <TextInput value=phone id="phone" label="Phone (optional)" input_type="tel" />
                    </div>
                    <TextInput value=subject id="subject" label="Subject" required=true />
                    <div class="space-y-2">
                        <label for="message" class="text-sm font-medium">"Message"</label>
                        <textarea
                            id="message"
                            rows="6"
                            required=true
                            class="w-full px-3 py-2 border border-input rounded-md bg-background"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    {move || match result.get() {
                        Some(Err(e)) => Some(view! { <ErrorDisplay error=e.to_string() /> }),
                        _ => None,
                    }}

                    <Button button_type="submit">
                        {move || if pending.get() { "Sending..." } else { "Send Message" }}
                    </Button>
                </form>
            </div>
        </div>

        {move || match result.get() {
            Some(Ok(receipt)) => Some(view! {
                <ModalWrapper title="Message Sent" on_close=close_dialog>
                    <p class="mb-2">
                        "Thank you, " {receipt.first_name.clone()} ". An agent will get back to you shortly."
                    </p>
                    <p class="mb-6 text-xs text-muted-foreground">
                        "Reference: " {receipt.reference.to_string()}
                    </p>
                    <Button on_click=close_dialog>"Close"</Button>
                </ModalWrapper>
            }),
            _ => None,
        }}
    }
}
