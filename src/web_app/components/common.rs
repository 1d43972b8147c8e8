// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the site.
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::format::format_price;

/// Loading indicator with a message
#[component]
pub fn Loading(
    /// Message shown next to the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex justify-center mb-8">
            <div class="flex items-center gap-3 p-4 bg-primary/10 rounded-lg">
                <div class="animate-spin rounded-full h-5 w-5 border-2 border-primary/30 border-t-primary"></div>
                <p class="text-primary font-medium animate-pulse">{message}</p>
            </div>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Informational alert, used for "no results"
#[component]
pub fn Alert(
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div
            role="alert"
            class="mb-8 rounded-lg border border-amber-200 bg-amber-50 p-4 flex gap-3 \
                   dark:border-amber-800 dark:bg-amber-950"
        >
            <span class="text-amber-600 text-lg">"🔍"</span>
            <div>
                <h5 class="font-medium mb-1">{title}</h5>
                <p class="text-sm text-muted-foreground">{description}</p>
            </div>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md \
                      bg-primary text-primary-foreground hover:bg-primary/90 transition-colors \
                      disabled:opacity-50 disabled:cursor-not-allowed font-medium shadow-sm";

    view! {
        <button
            type=button_type
            disabled=disabled
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Outline button for secondary actions
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md \
                 border border-input bg-background hover:bg-muted transition-colors \
                 disabled:opacity-50 font-medium shadow-sm";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal dialog wrapper
///
/// The open/close state is owned by the parent.
#[component]
pub fn ModalWrapper(
    children: Children,
    /// Callback when the dialog should close
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            role="dialog"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-background rounded-lg shadow-2xl w-full max-w-md p-6"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-lg font-semibold">{title}</h2>
                    <button
                        class="text-muted-foreground hover:text-foreground rounded-full p-1"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Whole-star rating out of five
#[component]
pub fn StarRating(
    /// Filled stars (clamped to 0..=5)
    rating: u8,
) -> impl IntoView {
    let filled = usize::from(rating.min(5));

    view! {
        <div class="flex items-center gap-0.5" title=format!("{} out of 5", filled)>
            {(0..5).map(|i| {
                let class = if i < filled { "text-amber-400 text-lg" } else { "text-muted-foreground text-lg" };
                view! { <span class=class>"★"</span> }
            }).collect_view()}
        </div>
    }
}

/// Small pill label
#[component]
pub fn Badge(
    children: Children,
    /// Colour variant
    #[prop(default = "primary")]
    variant: &'static str,
) -> impl IntoView {
    let class = match variant {
        "featured" => "px-2.5 py-0.5 text-xs font-semibold rounded-full bg-amber-500 text-white",
        "price" => "px-2.5 py-0.5 text-lg font-bold rounded-full bg-black/70 text-white backdrop-blur-sm",
        "secondary" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-muted text-foreground inline-flex items-center gap-1",
        _ => "px-2.5 py-0.5 text-xs font-semibold rounded-full bg-primary text-primary-foreground",
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    /// Element id, also used by the label
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, email, tel, number, password)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                required=required
                class="w-full px-3 py-2 border border-input rounded-md bg-background \
                       focus:ring-2 focus:ring-primary outline-none"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Formatted dollar amount
#[component]
pub fn PriceDisplay(
    price: u64,
    /// Larger, coloured variant used on the detail page
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-3xl font-bold text-primary"
    } else {
        "font-medium"
    };

    view! {
        <span class=class>
            {format_price(price)}
        </span>
    }
}

/// Centered section title with a subtitle
#[component]
pub fn SectionHeading(
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-12 text-center">
            <h2 class="mb-2 text-3xl font-bold tracking-tight md:text-4xl">{title}</h2>
            <p class="mx-auto max-w-2xl text-muted-foreground">{subtitle}</p>
        </div>
    }
}

/// Simple tab strip; the parent owns the selected key
#[component]
pub fn TabList(
    /// (key, label) pairs
    tabs: Vec<(&'static str, &'static str)>,
    selected: RwSignal<&'static str>,
) -> impl IntoView {
    let columns = format!("grid w-full gap-1 rounded-md bg-muted p-1 grid-cols-{}", tabs.len());

    view! {
        <div class=columns role="tablist">
            {tabs.into_iter().map(|(key, label)| {
                view! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected=move || (selected.get() == key).to_string()
                        class=move || {
                            if selected.get() == key {
                                "rounded-sm px-3 py-1.5 text-sm font-medium bg-background shadow-sm"
                            } else {
                                "rounded-sm px-3 py-1.5 text-sm font-medium text-muted-foreground"
                            }
                        }
                        on:click=move |_| selected.set(key)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
