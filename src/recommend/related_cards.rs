// Groups cards that talk about the same thing
//
// Cards are related when their keyword sets overlap enough. Grouping is a
// single greedy pass in board order: the first card to claim another keeps
// it, so a chain A~B~C may end up split depending on where the cards sit.

use crate::config::RelatedCardsConfig;
use crate::error::Result;
use crate::recommend::text::Tokenizer;
use crate::recommend::{AnalysisContext, Analyzer, CardRef, Priority, Recommendation, RecommendationKind};
use std::collections::{HashMap, HashSet};

/// Card keywords, all occurrences and the distinct set
struct CardTokens {
    tokens: Vec<String>,
    set: HashSet<String>,
}

pub struct RelatedCardsAnalyzer {
    config: RelatedCardsConfig,
    tokenizer: Tokenizer,
}

impl RelatedCardsAnalyzer {
    pub fn new(config: RelatedCardsConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&config.stop_words, config.min_token_len)?;
        Ok(Self { config, tokenizer })
    }

    fn is_related(&self, a: &HashSet<String>, b: &HashSet<String>) -> bool {
        let shared = a.intersection(b).count();
        if shared >= self.config.min_shared_keywords {
            return true;
        }
        if shared == 0 {
            return false;
        }
        let smaller = a.len().min(b.len()) as f64;
        shared as f64 / smaller >= self.config.min_overlap_ratio
    }

    /// Greedy single pass; returns groups of indices with at least two members
    fn group(&self, cards: &[CardTokens]) -> Vec<Vec<usize>> {
        let mut processed = vec![false; cards.len()];
        let mut groups = Vec::new();

        for seed in 0..cards.len() {
            if processed[seed] {
                continue;
            }

            let mut members = vec![seed];
            for other in 0..cards.len() {
                if other == seed || processed[other] {
                    continue;
                }
                if self.is_related(&cards[seed].set, &cards[other].set) {
                    members.push(other);
                    processed[other] = true;
                }
            }

            if members.len() >= 2 {
                processed[seed] = true;
                groups.push(members);
            }
        }

        groups
    }

    /// Most frequent token across the group, ties go to the first seen
    fn common_keyword(cards: &[CardTokens], members: &[usize]) -> Option<String> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for token in members.iter().flat_map(|&i| cards[i].tokens.iter()) {
            let count = counts.entry(token.as_str()).or_insert(0);
            if *count == 0 {
                order.push(token.as_str());
            }
            *count += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for token in order {
            let count = counts[token];
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((token, count));
            }
        }

        best.map(|(token, _)| token.to_string())
    }
}

impl Analyzer for RelatedCardsAnalyzer {
    fn name(&self) -> &'static str {
        "related_cards"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Recommendation> {
        let tokens: Vec<CardTokens> = ctx
            .cards
            .iter()
            .map(|card| {
                let tokens = self.tokenizer.tokenize(&card.search_text());
                let set = tokens.iter().cloned().collect();
                CardTokens { tokens, set }
            })
            .collect();

        let mut suggestions = Vec::new();

        for members in self.group(&tokens) {
            let list_titles: HashSet<&str> = members.iter().map(|&i| ctx.cards[i].list_title).collect();
            if list_titles.len() <= 1 && members.len() < self.config.min_single_list_group {
                continue;
            }

            let keyword = Self::common_keyword(&tokens, &members)
                .unwrap_or_else(|| "related topics".to_string());
            let related_cards: Vec<CardRef> =
                members.iter().map(|&i| CardRef::from(ctx.cards[i])).collect();

            suggestions.push(Recommendation {
                description: format!(
                    "{} card(s) appear to be related based on similar content. Consider grouping them together.",
                    related_cards.len()
                ),
                reason: format!(
                    "Cards share common keywords and themes (e.g., \"{}\")",
                    keyword
                ),
                kind: RecommendationKind::RelatedCards {
                    related_cards,
                    keyword,
                },
                priority: Priority::Medium,
                title: "Related Cards".to_string(),
            });
        }

        suggestions
    }
}
