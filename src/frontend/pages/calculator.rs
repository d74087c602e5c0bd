//! Price calculator page.

use crate::backend::pricing::{Metal, PriceInput, Purity, Quote, parse_amount, quote};
use crate::backend::utils::config::PricingSettings;
use crate::frontend::services::session::SessionState;
use anyhow::Result;
use dioxus::prelude::*;

/// Raw text of the calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceForm {
    pub metal: Metal,
    pub purity: String,
    pub weight_grams: String,
    pub price_per_gram: String,
    pub labor_cost: String,
    pub stones_cost: String,
    pub markup_percent: String,
}

impl PriceForm {
    pub fn new(settings: &PricingSettings) -> Self {
        let metal = Metal::Gold;
        Self {
            metal,
            purity: metal.standard_purity().to_string(),
            weight_grams: String::new(),
            price_per_gram: String::new(),
            labor_cost: String::new(),
            stones_cost: String::new(),
            markup_percent: settings.default_markup_percent.to_string(),
        }
    }

    /// Switches metal and resets the purity to its standard grade.
    pub fn select_metal(&mut self, metal: Metal) {
        self.metal = metal;
        self.purity = metal.standard_purity().to_string();
    }

    pub fn to_input(&self) -> Result<PriceInput> {
        Ok(PriceInput {
            metal: self.metal,
            purity: Purity::parse(&self.purity)?,
            weight_grams: parse_amount("Weight", &self.weight_grams)?,
            price_per_gram: parse_amount("Price per gram", &self.price_per_gram)?,
            labor_cost: parse_amount("Labor cost", &self.labor_cost)?,
            stones_cost: parse_amount("Stones cost", &self.stones_cost)?,
            markup_percent: parse_amount("Markup", &self.markup_percent)?,
        })
    }

    pub fn quote(&self) -> Result<Quote, String> {
        self.to_input()
            .and_then(|input| quote(&input))
            .map_err(|e| e.to_string())
    }
}

fn money(amount: f64, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

fn breakdown(quote: &Quote, currency: &str) -> [(&'static str, String); 6] {
    [
        ("Metal value", money(quote.metal_value, currency)),
        ("Labor", money(quote.labor_cost, currency)),
        ("Stones", money(quote.stones_cost, currency)),
        ("Subtotal", money(quote.subtotal, currency)),
        ("Markup", money(quote.markup, currency)),
        ("Total", money(quote.total, currency)),
    ]
}

#[component]
pub fn Calculator() -> Element {
    let session = use_context::<SessionState>();
    let settings = use_context::<PricingSettings>();
    let mut form = use_signal(|| PriceForm::new(&settings));
    let result = use_memo(move || form.read().quote());
    let mut error = use_signal(|| None::<String>);

    let user = session.current_user().unwrap_or_default();
    let currency = settings.currency.clone();

    let logout = move |_| {
        let mut session = session;
        spawn(async move {
            if let Err(e) = session.logout().await {
                log::error!("Failed to sign out: {e:#}");
                error.set(Some(format!("{e:#}")));
            }
        });
    };

    let field = move |label: &'static str, value: String, set: fn(&mut PriceForm, String)| {
        rsx! {
            label {
                class: "field",
                span { "{label}" }
                input {
                    class: "text-input",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |e| set(&mut form.write(), e.value()),
                }
            }
        }
    };

    let current = form.read().clone();

    rsx! {
        div {
            class: "card calculator",
            header {
                class: "calculator-header",
                h1 { "Price a piece" }
                div {
                    class: "user",
                    span { "{user}" }
                    button { class: "secondary", onclick: logout, "Sign out" }
                }
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            div {
                class: "form",
                label {
                    class: "field",
                    span { "Metal" }
                    select {
                        value: "{current.metal}",
                        onchange: move |e| {
                            if let Some(metal) = Metal::from_name(&e.value()) {
                                form.write().select_metal(metal);
                            }
                        },
                        for metal in Metal::ALL {
                            option {
                                value: "{metal}",
                                selected: metal == current.metal,
                                "{metal}"
                            }
                        }
                    }
                }
                {field("Purity (e.g. 18k, 925)", current.purity.clone(), |f, v| f.purity = v)}
                {field("Weight (g)", current.weight_grams.clone(), |f, v| f.weight_grams = v)}
                {field("Pure metal price per gram", current.price_per_gram.clone(), |f, v| f.price_per_gram = v)}
                {field("Labor", current.labor_cost.clone(), |f, v| f.labor_cost = v)}
                {field("Stones", current.stones_cost.clone(), |f, v| f.stones_cost = v)}
                {field("Markup (%)", current.markup_percent.clone(), |f, v| f.markup_percent = v)}
            }
            {match result() {
                Ok(quote) => rsx! {
                    table {
                        class: "quote",
                        for (label, amount) in breakdown(&quote, &currency) {
                            tr {
                                class: if label == "Total" { "total" } else { "" },
                                td { "{label}" }
                                td { "{amount}" }
                            }
                        }
                    }
                },
                Err(message) => rsx! {
                    div { class: "error-message", "{message}" }
                },
            }}
        }
    }
}
