//! Static content pages and the order confirmation.

use askama::Template;

use crate::error::Result;

use super::{LocalState, RenderContext, Screen, ScreenKind};

/// A question on the FAQ page.
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "What payment methods do you accept?",
        answer: "Visa, MasterCard, PayPal, and mobile money services like MTN Mobile Money and AirtelTigo Money.",
    },
    FaqEntry {
        question: "What are your shipping options?",
        answer: "Standard shipping within Ghana takes 3-5 business days and express shipping takes 1-2 business days.",
    },
    FaqEntry {
        question: "What is your return policy?",
        answer: "Most items can be returned within 14 days in their original condition with all accessories included.",
    },
    FaqEntry {
        question: "How can I track my order?",
        answer: "Once your order ships you will receive an email with a tracking number and a link to the carrier's website.",
    },
    FaqEntry {
        question: "Do you offer a warranty on your products?",
        answer: "All new products come with the manufacturer's standard warranty. Terms vary by product.",
    },
];

/// FAQ page template.
#[derive(Template)]
#[template(path = "pages/faq.html")]
pub struct FaqTemplate<'a> {
    pub entries: &'a [FaqEntry],
}

/// Refund and return policy template.
#[derive(Template)]
#[template(path = "pages/policy.html")]
pub struct PolicyTemplate;

/// About page template.
#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub store_name: String,
}

/// Contact page template.
#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub submitted: bool,
}

/// Order confirmation template.
#[derive(Template)]
#[template(path = "pages/order_confirmation.html")]
pub struct OrderConfirmationTemplate;

/// # Errors
///
/// Returns an error if the template fails to render.
pub fn faq() -> Result<Screen> {
    Ok(Screen {
        kind: ScreenKind::Faq,
        title: "Frequently Asked Questions".to_string(),
        html: FaqTemplate { entries: &FAQ }.render()?,
    })
}

/// # Errors
///
/// Returns an error if the template fails to render.
pub fn policy() -> Result<Screen> {
    Ok(Screen {
        kind: ScreenKind::Policy,
        title: "Refund & Return Policy".to_string(),
        html: PolicyTemplate.render()?,
    })
}

/// # Errors
///
/// Returns an error if the template fails to render.
pub fn about(ctx: &RenderContext<'_>) -> Result<Screen> {
    Ok(Screen {
        kind: ScreenKind::About,
        title: format!("About {}", ctx.config.store_name),
        html: AboutTemplate {
            store_name: ctx.config.store_name.clone(),
        }
        .render()?,
    })
}

/// Contact form, or a thank-you note once it has been sent.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn contact(ctx: &RenderContext<'_>) -> Result<Screen> {
    let submitted = matches!(ctx.local, LocalState::Contact { submitted: true });
    Ok(Screen {
        kind: ScreenKind::Contact,
        title: "Contact Us".to_string(),
        html: ContactTemplate { submitted }.render()?,
    })
}

/// # Errors
///
/// Returns an error if the template fails to render.
pub fn order_confirmation() -> Result<Screen> {
    Ok(Screen {
        kind: ScreenKind::OrderConfirmation,
        title: "Order Confirmed".to_string(),
        html: OrderConfirmationTemplate.render()?,
    })
}
