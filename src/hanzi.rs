//! The hanzi query service: pure, deterministic lookups over static tables.
//!
//! The tables are data, not logic. They live in
//! `resources/hanzi_tables.toml`, are embedded at compile time, and parsed
//! once on first use. Unknown input degrades to placeholder output, never
//! to an error.

use indexmap::IndexMap;
use serde::Deserialize;

/// Deserialized form of the table resource. `IndexMap` keeps the file's
/// entry order, which is the scan order for first-match classification.
#[derive(Debug, Deserialize)]
struct HanziTables {
    /// Rhyme finals, scanned in order; the first substring hit wins.
    finals: Vec<String>,
    pinyin: IndexMap<String, String>,
    meanings: IndexMap<String, String>,
    structures: IndexMap<String, Vec<String>>,
    parts_of_speech: IndexMap<String, Vec<String>>,
    categories: IndexMap<String, Vec<String>>,
    successors: IndexMap<String, Vec<String>>,
}

lazy_static! {
    static ref TABLES: HanziTables =
        toml::from_str(include_str!("../resources/hanzi_tables.toml"))
            .expect("embedded hanzi table resource is malformed");
}

/// True when `text` is non-empty and every code point is a CJK unified
/// ideograph (U+4E00..=U+9FFF).
pub fn is_hanzi(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// First table whose member list contains `text`, in file order.
fn classify(table: &'static IndexMap<String, Vec<String>>, text: &str) -> Option<&'static str> {
    for (name, members) in table {
        if members.iter().any(|m| m.as_str() == text) {
            return Some(name.as_str());
        }
    }
    None
}

/// Pure lookup and string operations over the hanzi tables.
#[derive(Debug, Default)]
pub struct HanziProcessor;

impl HanziProcessor {
    pub fn new() -> Self {
        HanziProcessor
    }

    pub fn is_hanzi(&self, text: &str) -> bool {
        is_hanzi(text)
    }

    /// Per-character pinyin, space-joined; `?` stands in for characters the
    /// table does not know. Non-hanzi input yields the empty string.
    pub fn pinyin(&self, text: &str) -> String {
        if !is_hanzi(text) {
            return String::new();
        }
        text.chars()
            .map(|c| {
                TABLES
                    .pinyin
                    .get(c.to_string().as_str())
                    .map(String::as_str)
                    .unwrap_or("?")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn meaning(&self, text: &str) -> String {
        if let Some(meaning) = TABLES.meanings.get(text) {
            meaning.clone()
        } else if is_hanzi(text) {
            format!("汉字: {}", text)
        } else {
            "非汉字".to_string()
        }
    }

    /// Structural classification; characters outside the tables are judged
    /// by length alone.
    pub fn structural_class(&self, text: &str) -> String {
        if let Some(name) = classify(&TABLES.structures, text) {
            return name.to_string();
        }
        match text.chars().count() {
            0 => "未知结构",
            1 => "独体结构",
            _ => "组合结构",
        }
        .to_string()
    }

    pub fn grammatical_category(&self, text: &str) -> String {
        classify(&TABLES.parts_of_speech, text)
            .unwrap_or("未知词性")
            .to_string()
    }

    pub fn semantic_category(&self, text: &str) -> String {
        classify(&TABLES.categories, text)
            .unwrap_or("其他类别")
            .to_string()
    }

    /// Rhyme class derived from the pinyin. The finals list is scanned in
    /// its fixed order, so a single-vowel final can win over a longer one
    /// ("hao" rhymes as a, not ao).
    pub fn rhyme_class(&self, text: &str) -> String {
        let pinyin = self.pinyin(text);
        if !pinyin.is_empty() && pinyin != "?" {
            for rhyme_final in &TABLES.finals {
                if pinyin.contains(rhyme_final.as_str()) {
                    return format!("韵母: {}", rhyme_final);
                }
            }
        }
        "未知押韵".to_string()
    }

    /// Characters that typically follow `text`; empty when the table has no
    /// entry.
    pub fn typical_successors(&self, text: &str) -> &'static [String] {
        TABLES
            .successors
            .get(text)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Canned dialogue response for the text.
    pub fn dialogue(&self, text: &str) -> String {
        if text.contains("你好") || text.contains("您好") {
            "你好！我是汉字编程语言助手。".to_string()
        } else if text.contains('吗') || text.contains('？') || text.contains('?') {
            format!("这是一个关于'{}'的问题。", text)
        } else {
            format!("你说的是: {}", text)
        }
    }

    pub fn structural_fit(&self, first: &str, second: &str) -> String {
        let a = self.structural_class(first);
        let b = self.structural_class(second);
        if a == b {
            format!("结构相同: {}", a)
        } else if a.contains("结构") && b.contains("结构") {
            format!("结构相似: {} ↔ {}", a, b)
        } else {
            "结构不同".to_string()
        }
    }

    pub fn semantic_fit(&self, first: &str, second: &str) -> String {
        let a = self.semantic_category(first);
        let b = self.semantic_category(second);
        if a == b && a != "其他类别" {
            format!("语义类别相同: {}", a)
        } else {
            format!("语义类别不同: {} ↔ {}", a, b)
        }
    }

    pub fn concat(&self, first: &str, second: &str) -> String {
        format!("{}{}", first, second)
    }

    /// Split at a character offset clamped to `[0, len]`. Empty input
    /// yields two empty halves.
    pub fn split(&self, text: &str, position: i64) -> (String, String) {
        if text.is_empty() {
            return (String::new(), String::new());
        }
        let len = text.chars().count() as i64;
        let cut = position.clamp(0, len) as usize;
        let head = text.chars().take(cut).collect();
        let tail = text.chars().skip(cut).collect();
        (head, tail)
    }

    /// Repeat the text; zero or negative counts yield the empty string.
    pub fn repeat(&self, text: &str, times: i64) -> String {
        if times <= 0 {
            String::new()
        } else {
            text.repeat(times as usize)
        }
    }
}
