#![cfg(test)]

use crate::github::types::Record;
use crate::portfolio::card::{Card, CardId, FooterItem, Link};

pub fn make_record(name: &str) -> Record {
    Record {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        topics: vec!["rust".to_string()],
        language: Some("Rust".to_string()),
        url: format!("https://github.com/someone/{name}"),
        fork: false,
    }
}

pub fn make_card(id: usize, body: &str) -> Card {
    Card {
        id: CardId(id),
        title: format!("card {id}"),
        body: body.to_string(),
        footer: vec![
            FooterItem::Tags(vec!["rust".to_string()]),
            FooterItem::Link(Link {
                label: "View on GitHub".to_string(),
                url: format!("https://github.com/someone/card-{id}"),
            }),
        ],
        body_state: Default::default(),
    }
}

pub fn make_cards(n: usize) -> Vec<Card> {
    (0..n).map(|i| make_card(i, "short body")).collect()
}
