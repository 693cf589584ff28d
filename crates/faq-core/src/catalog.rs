//! The appliance retailer's FAQ catalog.
//!
//! Built once on first access and never mutated afterwards.

use once_cell::sync::Lazy;

use crate::model::{Answer, AnswerBlock, Bullet, FaqCategory, FaqItem, Icon};
use crate::repository::FaqRepository;

static CATALOG: Lazy<FaqRepository> = Lazy::new(|| FaqRepository::from_trusted(build_categories()));

/// Process-wide read-only catalog.
pub fn catalog() -> &'static FaqRepository {
    &CATALOG
}

fn p(text: &str) -> AnswerBlock {
    AnswerBlock::Paragraph {
        text: text.to_string(),
    }
}

fn bullets(items: &[(Option<&str>, &str)]) -> AnswerBlock {
    AnswerBlock::Bullets {
        items: items
            .iter()
            .map(|(label, text)| Bullet {
                label: label.map(str::to_string),
                text: text.to_string(),
            })
            .collect(),
    }
}

fn callout(title: Option<&str>, body: &str) -> AnswerBlock {
    AnswerBlock::Callout {
        title: title.map(str::to_string),
        body: body.to_string(),
    }
}

fn item(id: &str, question: &str, blocks: Vec<AnswerBlock>, icon: Icon, keywords: &[&str]) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: Answer::new(blocks),
        icon: Some(icon),
        keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
    }
}

fn category(id: &str, title: &str, items: Vec<FaqItem>) -> FaqCategory {
    FaqCategory {
        id: id.to_string(),
        title: title.to_string(),
        items,
    }
}

fn build_categories() -> Vec<FaqCategory> {
    vec![
        category(
            "products",
            "Products",
            vec![
                item(
                    "products-1",
                    "What products do you offer?",
                    vec![
                        p("NI Drip Central Electronics & Appliances offers a comprehensive range of home appliances and electronics, including:"),
                        bullets(&[
                            (Some("Kitchen Appliances"), "Refrigerators, washing machines, dishwashers, ovens, microwaves, and small kitchen appliances"),
                            (Some("Home Electronics"), "Televisions, audio systems, and entertainment devices"),
                            (Some("Laundry & Cleaning"), "Washing machines, tumble dryers, and vacuum cleaners"),
                        ]),
                        p("We stock products from leading brands and ensure all items meet our quality standards."),
                    ],
                    Icon::Package,
                    &["products", "appliances", "electronics", "stock", "range", "offer"],
                ),
                item(
                    "products-2",
                    "Do you sell refurbished appliances?",
                    vec![
                        p("Yes, we offer a carefully curated selection of **refurbished appliances** alongside our new products."),
                        callout(
                            Some("Our Refurbishment Promise"),
                            "All refurbished items undergo thorough inspection, professional cleaning, and rigorous testing before being offered for sale. Each product is graded based on its cosmetic condition, and any defects are clearly disclosed.",
                        ),
                        p("Refurbished products offer excellent value while maintaining quality and reliability. They come with a warranty for your peace of mind."),
                    ],
                    Icon::Package,
                    &["refurbished", "used", "second hand", "reconditioned", "graded"],
                ),
            ],
        ),
        category(
            "delivery",
            "Delivery & Collection",
            vec![
                item(
                    "delivery-1",
                    "What are your delivery options?",
                    vec![
                        p("We offer flexible delivery options to suit your needs:"),
                        bullets(&[
                            (Some("Standard Delivery"), "Available across Belfast and surrounding areas with scheduled time slots"),
                            (Some("Express Delivery"), "Next-day delivery available for in-stock items ordered before 2pm"),
                            (Some("Collection"), "Free collection from our store during business hours"),
                        ]),
                        p("Delivery charges vary based on your location and the size of your order. Large appliances include installation where applicable."),
                    ],
                    Icon::Truck,
                    &["delivery", "shipping", "collection", "pickup", "belfast"],
                ),
                item(
                    "delivery-2",
                    "Do you deliver outside Belfast?",
                    vec![
                        p("Absolutely. While Belfast is our primary service area, we provide delivery across **Northern Ireland** and can arrange shipping to the **Republic of Ireland** and **mainland UK**."),
                        p("Delivery costs and timeframes vary by location. Please contact us for a quote if you're outside our standard delivery zones."),
                    ],
                    Icon::Globe,
                    &["outside", "northern ireland", "uk", "ireland", "mainland", "shipping"],
                ),
                item(
                    "delivery-3",
                    "How long does delivery take?",
                    vec![
                        p("Delivery timeframes depend on your location and product availability:"),
                        bullets(&[
                            (Some("Belfast & Local Areas"), "1-3 working days"),
                            (Some("Greater Northern Ireland"), "3-5 working days"),
                            (Some("Republic of Ireland & UK"), "5-7 working days"),
                        ]),
                        p("You'll receive tracking information once your order is dispatched, and we'll contact you to arrange a convenient delivery slot."),
                    ],
                    Icon::Clock,
                    &["time", "timeframe", "long", "days", "when", "how long"],
                ),
                item(
                    "delivery-4",
                    "What if my delivery is delayed?",
                    vec![
                        p("While we strive to meet all delivery commitments, occasional delays can occur due to high demand, supply chain issues, or unforeseen circumstances."),
                        p("If your delivery is delayed:"),
                        bullets(&[
                            (None, "We'll contact you proactively to explain the situation"),
                            (None, "You can track your order status online or by contacting our team"),
                            (None, "We'll work with you to reschedule at your earliest convenience"),
                        ]),
                    ],
                    Icon::Timer,
                    &["delayed", "late", "not arrived", "waiting", "delay"],
                ),
            ],
        ),
        category(
            "issues",
            "Issues & Returns",
            vec![
                item(
                    "issues-1",
                    "What if my item arrives damaged or faulty?",
                    vec![
                        p("We take great care in packaging and delivering your items. However, if you receive a damaged or faulty product, please:"),
                        bullets(&[
                            (Some("Contact us within 48 hours"), "of receiving your order"),
                            (Some("Take photographs"), "of the damage or fault"),
                            (Some("Keep all packaging"), "until the issue is resolved"),
                        ]),
                        p("We'll arrange a replacement, repair, or full refund depending on the situation and your preference."),
                    ],
                    Icon::AlertTriangle,
                    &["damaged", "faulty", "broken", "defective", "not working"],
                ),
                item(
                    "issues-2",
                    "What is your returns policy?",
                    vec![
                        p("We offer a **14-day returns policy** on most products, starting from the day you receive your order."),
                        p("To be eligible for a return:"),
                        bullets(&[
                            (None, "The item must be unused and in its original condition"),
                            (None, "Original packaging must be intact"),
                            (None, "You must have proof of purchase"),
                        ]),
                        callout(
                            Some("Please note"),
                            "Return shipping costs may apply for change-of-mind returns. Faulty items are collected free of charge.",
                        ),
                    ],
                    Icon::RotateCcw,
                    &["returns", "return", "refund", "send back", "policy"],
                ),
                item(
                    "issues-3",
                    "How do I get a refund?",
                    vec![
                        p("Once your return is received and inspected, we'll process your refund within **5-7 working days**."),
                        p("Refunds are issued to the original payment method:"),
                        bullets(&[
                            (Some("Card payments"), "Credited back to your card (may take 3-5 additional days to appear)"),
                            (Some("Bank transfers"), "Returned to your bank account"),
                            (Some("Cash payments"), "Refunded via bank transfer or store credit"),
                        ]),
                    ],
                    Icon::RotateCcw,
                    &["refund", "money back", "reimbursement"],
                ),
            ],
        ),
        category(
            "warranty",
            "Warranties",
            vec![item(
                "warranty-1",
                "What warranties do you offer?",
                vec![
                    p("All products sold by NI Drip Central come with warranty coverage:"),
                    bullets(&[
                        (Some("New Products"), "Standard manufacturer's warranty (typically 1-2 years depending on product)"),
                        (Some("Refurbished Products"), "Minimum 6-month warranty on all refurbished items"),
                        (Some("Extended Warranties"), "Available for purchase on selected products"),
                    ]),
                    p("Warranty details are provided with your purchase documentation. Please retain your receipt as proof of purchase."),
                ],
                Icon::Shield,
                &["warranty", "guarantee", "protection", "coverage"],
            )],
        ),
        category(
            "payment",
            "Payment",
            vec![item(
                "payment-1",
                "What payment methods do you accept?",
                vec![
                    p("We accept a variety of payment methods for your convenience:"),
                    bullets(&[
                        (Some("Credit & Debit Cards"), "Visa, Mastercard, American Express"),
                        (Some("Bank Transfer"), "Available for larger purchases"),
                        (Some("Cash"), "Accepted for in-store purchases and collection"),
                        (Some("Finance Options"), "Interest-free and low-rate finance available on qualifying orders"),
                    ]),
                    p("All online payments are processed securely through our encrypted payment gateway."),
                ],
                Icon::CreditCard,
                &["payment", "pay", "card", "credit", "debit", "cash", "finance"],
            )],
        ),
        category(
            "support",
            "Customer Support",
            vec![item(
                "support-1",
                "How can I contact customer support?",
                vec![
                    p("Our friendly customer support team is here to help:"),
                    bullets(&[
                        (Some("Phone"), "Call us during business hours for immediate assistance"),
                        (Some("Email"), "Send us a message and we'll respond within 24 hours"),
                        (Some("In-Store"), "Visit us in Belfast for face-to-face support"),
                        (Some("Social Media"), "Reach out via our social channels"),
                    ]),
                    p("We aim to resolve all queries as quickly as possible and provide the best possible service."),
                ],
                Icon::Headphones,
                &["contact", "support", "help", "phone", "email", "reach"],
            )],
        ),
    ]
}
