use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// One pair of commonly confused words with their glosses and usage examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordPair {
    pub id: u32,
    pub word1: String,
    pub word2: String,
    pub definition1: String,
    pub definition2: String,
    pub examples_word1: Vec<String>,
    pub examples_word2: Vec<String>,
}

/// Reasons a set of pairs is rejected as a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate pair id {0}")]
    DuplicateId(u32),

    #[error("pair id must be positive")]
    InvalidId,

    #[error("pair {id}: field `{field}` is empty")]
    EmptyField { id: u32, field: &'static str },

    #[error("pair {id}: no example sentences for `{word}`")]
    MissingExamples { id: u32, word: String },

    #[error("pair {id}: example {index} for `{word}` is empty")]
    EmptyExample { id: u32, word: String, index: usize },
}

/// Ordered, read-only collection of paronym pairs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pairs: Vec<WordPair>,
}

impl Catalog {
    /// Validate `pairs` and wrap them in insertion order.
    pub fn new(pairs: Vec<WordPair>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(pairs.len());
        for pair in &pairs {
            validate_pair(pair)?;
            if !seen.insert(pair.id) {
                return Err(CatalogError::DuplicateId(pair.id));
            }
        }
        Ok(Self { pairs })
    }

    /// The dictionary shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let pairs = BUILTIN
            .iter()
            .map(|e| WordPair {
                id: e.id,
                word1: e.word1.to_string(),
                word2: e.word2.to_string(),
                definition1: e.definition1.to_string(),
                definition2: e.definition2.to_string(),
                examples_word1: e.examples_word1.iter().map(|s| s.to_string()).collect(),
                examples_word2: e.examples_word2.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self::new(pairs)
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look a pair up by its id.
    pub fn get(&self, id: u32) -> Option<&WordPair> {
        self.pairs.iter().find(|p| p.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

fn validate_pair(pair: &WordPair) -> Result<(), CatalogError> {
    if pair.id == 0 {
        return Err(CatalogError::InvalidId);
    }
    let fields = [
        ("word1", &pair.word1),
        ("word2", &pair.word2),
        ("definition1", &pair.definition1),
        ("definition2", &pair.definition2),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(CatalogError::EmptyField { id: pair.id, field });
        }
    }
    for (word, examples) in [
        (&pair.word1, &pair.examples_word1),
        (&pair.word2, &pair.examples_word2),
    ] {
        if examples.is_empty() {
            return Err(CatalogError::MissingExamples {
                id: pair.id,
                word: word.clone(),
            });
        }
        if let Some(index) = examples.iter().position(|s| s.trim().is_empty()) {
            return Err(CatalogError::EmptyExample {
                id: pair.id,
                word: word.clone(),
                index,
            });
        }
    }
    Ok(())
}

struct Entry {
    id: u32,
    word1: &'static str,
    word2: &'static str,
    definition1: &'static str,
    definition2: &'static str,
    examples_word1: [&'static str; 3],
    examples_word2: [&'static str; 3],
}

const BUILTIN: &[Entry] = &[
    Entry {
        id: 1,
        word1: "эффектный",
        word2: "эффективный",
        definition1: "производящий впечатление, эффект",
        definition2: "дающий результат, действенный",
        examples_word1: [
            "Артист вышел на сцену в эффектном костюме.",
            "Её эффектная внешность привлекала внимание.",
            "Финал спектакля был очень эффектным.",
        ],
        examples_word2: [
            "Мы выбрали эффективный метод обучения.",
            "Это лекарство оказалось эффективным.",
            "Команда разработала эффективную стратегию.",
        ],
    },
    Entry {
        id: 2,
        word1: "адресат",
        word2: "адресант",
        definition1: "получатель письма, посылки",
        definition2: "отправитель письма, посылки",
        examples_word1: [
            "Адресат не получил письмо вовремя.",
            "Укажите адресата на конверте.",
            "Посылка была доставлена адресату.",
        ],
        examples_word2: [
            "Адресант не указал обратный адрес.",
            "Письмо вернулось к адресанту.",
            "Данные адресанта обязательны для заполнения.",
        ],
    },
    Entry {
        id: 3,
        word1: "абонент",
        word2: "абонемент",
        definition1: "лицо, пользующееся услугами",
        definition2: "документ на право пользования",
        examples_word1: [
            "Абонент недоступен, попробуйте позже.",
            "Каждый абонент получил уведомление.",
            "Абонент может изменить тариф.",
        ],
        examples_word2: [
            "Я купил абонемент в бассейн на месяц.",
            "Абонемент действует до конца года.",
            "Годовой абонемент стоит дешевле.",
        ],
    },
    Entry {
        id: 4,
        word1: "невежа",
        word2: "невежда",
        definition1: "грубый, невоспитанный человек",
        definition2: "малообразованный, необразованный человек",
        examples_word1: [
            "Какой невежа — даже не поздоровался!",
            "Не будь невежей, уступи место.",
            "Его невежливое поведение всех возмутило.",
        ],
        examples_word2: [
            "В этом вопросе я полный невежда.",
            "Невежда не знает элементарных вещей.",
            "Не будь невеждой — читай больше книг.",
        ],
    },
    Entry {
        id: 5,
        word1: "представить",
        word2: "предоставить",
        definition1: "показать, познакомить, вообразить",
        definition2: "дать возможность, право пользоваться",
        examples_word1: [
            "Представьте себе эту картину.",
            "Позвольте представить вам моего коллегу.",
            "Трудно представить такое развитие событий.",
        ],
        examples_word2: [
            "Компания предоставила нам скидку.",
            "Предоставьте документы в срок.",
            "Банк предоставил кредит на выгодных условиях.",
        ],
    },
    Entry {
        id: 6,
        word1: "надеть",
        word2: "одеть",
        definition1: "натянуть одежду на себя",
        definition2: "облечь кого-то в одежду",
        examples_word1: [
            "Я надела новое платье на вечеринку.",
            "Надень шапку, на улице холодно.",
            "Он надел очки, чтобы прочитать текст.",
        ],
        examples_word2: [
            "Мама одела ребёнка в тёплую куртку.",
            "Одеть куклу в красивое платье.",
            "Бабушка одела внуков перед прогулкой.",
        ],
    },
];

#[cfg(test)]
pub(crate) fn sample_pair(id: u32, word1: &str, word2: &str) -> WordPair {
    WordPair {
        id,
        word1: word1.to_string(),
        word2: word2.to_string(),
        definition1: format!("значение {word1}"),
        definition2: format!("значение {word2}"),
        examples_word1: vec![format!("Пример со словом {word1}.")],
        examples_word2: vec![format!("Пример со словом {word2}.")],
    }
}
