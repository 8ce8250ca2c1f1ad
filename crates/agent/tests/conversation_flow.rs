//! End-to-end conversation flow against the real catalog document.

use std::path::Path;
use std::sync::Arc;

use commerce_bot_agent::{AgentConfig, ChatSession, CommerceAgent};
use commerce_bot_catalog::{load_catalog_file, CatalogIndex};
use commerce_bot_config::templates::ResponseTemplates;
use commerce_bot_core::{InMemoryStore, Language};

fn agent() -> CommerceAgent {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/products.json");
    let raw = load_catalog_file(path).expect("catalog document");
    let index = CatalogIndex::build(&raw).expect("catalog index");
    assert!(index.len() > 10, "sample catalog should be populated");

    CommerceAgent::new(
        Arc::new(index),
        ResponseTemplates::default(),
        Arc::new(InMemoryStore::default()),
        AgentConfig::default(),
    )
}

fn english_session(agent: &CommerceAgent) -> ChatSession {
    let mut session = agent.new_session();
    session.first_contact = false;
    session.language = Some(Language::English);
    session
}

#[tokio::test]
async fn full_onboarding_then_search() {
    let agent = agent();
    let mut session = agent.new_session();

    let welcome = agent.handle_message(&mut session, "hi").await;
    assert!(welcome.contains("Choose Language"));

    let greeting = agent.handle_message(&mut session, "6").await;
    assert_eq!(session.language, Some(Language::Hindi));
    assert!(greeting.contains("रोज़ केमिकल्स"));

    let results = agent.handle_message(&mut session, "show me broom").await;
    assert!(results.contains("Heavy Duty Broom"));
}

#[tokio::test]
async fn broom_search_ranks_brooms_first() {
    let agent = agent();
    let mut session = english_session(&agent);

    let reply = agent.handle_message(&mut session, "show me broom").await;
    let first_line = reply
        .lines()
        .find(|l| l.starts_with("1."))
        .expect("numbered results");
    assert!(first_line.contains("Broom"), "got: {first_line}");
}

#[tokio::test]
async fn price_of_acetic_acid() {
    let agent = agent();
    let mut session = english_session(&agent);

    let reply = agent
        .handle_message(&mut session, "what is the price of acetic acid")
        .await;
    assert!(reply.contains("Acetic Acid"));
    assert!(reply.contains("₹180"));
    assert!(reply.contains("Chemical - Raw Materials"));
}

#[tokio::test]
async fn fabric_conditioner_compound_phrase() {
    let agent = agent();
    let mut session = english_session(&agent);

    let reply = agent.handle_message(&mut session, "fabric conditioner").await;
    assert!(reply.contains("Fabric Conditioner Kit"));
}

#[tokio::test]
async fn plural_and_typo_queries() {
    let agent = agent();
    let mut session = english_session(&agent);

    let plural = agent.handle_message(&mut session, "show me brushes").await;
    assert!(plural.contains("Brush"));

    let typo = agent.handle_message(&mut session, "fenil").await;
    assert!(typo.contains("Phenyl"));
}

#[tokio::test]
async fn category_browse_lists_all_categories() {
    let agent = agent();
    let mut session = english_session(&agent);

    let reply = agent.handle_message(&mut session, "categories").await;
    for category in [
        "Chemical - Raw Materials",
        "Perfumes",
        "Ready To Use Chemicals",
        "Cleaning Tools",
    ] {
        assert!(reply.contains(category), "missing {category}");
    }
}

#[tokio::test]
async fn unmatched_query_gets_no_results_message() {
    let agent = agent();
    let mut session = english_session(&agent);

    let reply = agent
        .handle_message(&mut session, "show me xyznotaproduct")
        .await;
    assert!(reply.contains("No products found"));
}

#[tokio::test]
async fn localized_replies_after_tamil_selection() {
    let agent = agent();
    let mut session = agent.new_session();

    agent.handle_message(&mut session, "hello").await;
    agent.handle_message(&mut session, "2").await;
    assert_eq!(session.language, Some(Language::Tamil));

    let reply = agent
        .handle_message(&mut session, "show me xyznotaproduct")
        .await;
    assert!(reply.contains("பொருட்கள் இல்லை"), "got: {reply}");
}
