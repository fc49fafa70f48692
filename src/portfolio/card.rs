use crate::config::Highlight;
use crate::github::types::Record;
use itertools::Itertools;

const MAX_TOPIC_TAGS: usize = 4;
pub const NO_DESCRIPTION: &str = "No description provided.";
pub const REPO_LINK_LABEL: &str = "View on GitHub";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleLabel {
    ReadMore,
    ReadLess,
}

impl ToggleLabel {
    pub fn text(self) -> &'static str {
        match self {
            ToggleLabel::ReadMore => "Read More",
            ToggleLabel::ReadLess => "Read Less",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Items in a card's action area, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterItem {
    Tags(Vec<String>),
    Toggle(ToggleLabel),
    Link(Link),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyState {
    #[default]
    Unconstrained,
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub body: String,
    pub footer: Vec<FooterItem>,
    pub body_state: BodyState,
}

impl Card {
    pub fn from_record(id: CardId, record: &Record) -> Self {
        let body = record
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        let mut footer = Vec::new();
        let tags = record_tags(record);
        if !tags.is_empty() {
            footer.push(FooterItem::Tags(tags));
        }
        footer.push(FooterItem::Link(Link {
            label: REPO_LINK_LABEL.to_string(),
            url: record.url.clone(),
        }));

        Self {
            id,
            title: display_title(&record.name),
            body,
            footer,
            body_state: BodyState::Unconstrained,
        }
    }

    pub fn from_highlight(id: CardId, highlight: &Highlight) -> Self {
        let mut footer = Vec::new();
        if !highlight.tags.is_empty() {
            footer.push(FooterItem::Tags(highlight.tags.clone()));
        }
        if let Some(url) = &highlight.link {
            footer.push(FooterItem::Link(Link {
                label: REPO_LINK_LABEL.to_string(),
                url: url.clone(),
            }));
        }
        Self {
            id,
            title: highlight.title.clone(),
            body: highlight.description.clone(),
            footer,
            body_state: BodyState::Unconstrained,
        }
    }

    pub fn tags(&self) -> &[String] {
        self.footer
            .iter()
            .find_map(|item| match item {
                FooterItem::Tags(tags) => Some(tags.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn link(&self) -> Option<&Link> {
        self.footer.iter().find_map(|item| match item {
            FooterItem::Link(link) => Some(link),
            _ => None,
        })
    }

    pub fn toggle(&self) -> Option<ToggleLabel> {
        self.footer.iter().find_map(|item| match item {
            FooterItem::Toggle(label) => Some(*label),
            _ => None,
        })
    }

    pub fn toggle_count(&self) -> usize {
        self.footer
            .iter()
            .filter(|item| matches!(item, FooterItem::Toggle(_)))
            .count()
    }

    pub fn tag_line(&self) -> String {
        self.tags().iter().join(" · ")
    }
}

pub fn display_title(name: &str) -> String {
    name.replace(['-', '_'], " ")
}

fn record_tags(record: &Record) -> Vec<String> {
    let mut tags: Vec<String> = record.topics.iter().take(MAX_TOPIC_TAGS).cloned().collect();
    if let Some(lang) = record.language.as_deref().filter(|l| !l.is_empty()) {
        let lang_lower = lang.to_lowercase();
        if !record.topics.iter().any(|t| t.to_lowercase() == lang_lower) {
            tags.push(lang.to_string());
        }
    }
    tags
}

/// Drops forks and the repository already featured as a highlight.
pub fn filter_records(records: Vec<Record>, highlighted: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| !r.fork && r.name != highlighted)
        .collect()
}

pub fn project_records(records: &[Record], first_id: usize) -> Vec<Card> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| Card::from_record(CardId(first_id + i), r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn title_replaces_separators() {
        assert_eq!(display_title("my-cool_repo"), "my cool repo");
    }

    #[test]
    fn missing_description_uses_placeholder() {
        let mut record = make_record("a");
        record.description = None;
        let card = Card::from_record(CardId(0), &record);
        assert_eq!(card.body, NO_DESCRIPTION);

        record.description = Some("  ".to_string());
        let card = Card::from_record(CardId(0), &record);
        assert_eq!(card.body, NO_DESCRIPTION);
    }

    #[test]
    fn tags_limit_topics_and_append_language() {
        let mut record = make_record("a");
        record.topics = ["one", "two", "three", "four", "five"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        record.language = Some("Rust".to_string());
        let card = Card::from_record(CardId(0), &record);
        assert_eq!(card.tags(), &["one", "two", "three", "four", "Rust"]);
    }

    #[test]
    fn language_already_a_topic_is_not_repeated() {
        let mut record = make_record("a");
        record.topics = vec!["python".to_string()];
        record.language = Some("Python".to_string());
        let card = Card::from_record(CardId(0), &record);
        assert_eq!(card.tags(), &["python"]);
    }

    #[test]
    fn no_tags_means_no_tags_item() {
        let mut record = make_record("a");
        record.topics.clear();
        record.language = None;
        let card = Card::from_record(CardId(0), &record);
        assert_eq!(card.footer.len(), 1);
        assert!(matches!(card.footer[0], FooterItem::Link(_)));
        assert_eq!(card.link().unwrap().url, record.url);
    }

    #[test]
    fn filter_drops_forks_and_highlight() {
        let mut fork = make_record("forked");
        fork.fork = true;
        let records = vec![
            make_record("keep"),
            fork,
            make_record("Neural-Machine-Translation-Eng-Arb"),
        ];
        let kept = filter_records(records, "Neural-Machine-Translation-Eng-Arb");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "keep");
    }

    #[test]
    fn projection_assigns_sequential_ids() {
        let records = vec![make_record("a"), make_record("b")];
        let cards = project_records(&records, 5);
        assert_eq!(cards[0].id, CardId(5));
        assert_eq!(cards[1].id, CardId(6));
    }

    #[test]
    fn highlight_without_link_has_no_link() {
        let highlight = Highlight {
            title: "T".to_string(),
            description: "D".to_string(),
            tags: vec![],
            link: None,
        };
        let card = Card::from_highlight(CardId(0), &highlight);
        assert!(card.footer.is_empty());
        assert!(card.link().is_none());
    }
}
