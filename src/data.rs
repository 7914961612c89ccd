//! Reference data: the country pool and the difficulty table.
//!
//! Both are load-once, immutable inputs to the session. A built-in pool
//! ships with the crate; an external JSON pool can be supplied instead and
//! goes through the same validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::types::Difficulty;

/// One quiz subject: identifier, two display names, globe coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub id: String,
    /// Primary display name
    pub name: String,
    /// Secondary display name
    pub local_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Per-tier knobs: time budget, option count, score multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Countdown budget per question; `None` means untimed
    pub duration_s: Option<u32>,
    pub option_count: usize,
    pub multiplier: f64,
    pub label: &'static str,
}

/// The shipped difficulty table.
pub fn profile(difficulty: Difficulty) -> DifficultyProfile {
    match difficulty {
        Difficulty::Easy => DifficultyProfile {
            duration_s: Some(180),
            option_count: 3,
            multiplier: 1.0,
            label: "Novice",
        },
        Difficulty::Medium => DifficultyProfile {
            duration_s: Some(120),
            option_count: 4,
            multiplier: 1.5,
            label: "Advanced",
        },
        Difficulty::Hard => DifficultyProfile {
            duration_s: Some(60),
            option_count: 4,
            multiplier: 2.5,
            label: "Master",
        },
    }
}

/// (id, name, local name, lat, lon)
const BUILTIN: &[(&str, &str, &str, f64, f64)] = &[
    ("us", "United States", "美国", 37.0, -95.0),
    ("br", "Brazil", "巴西", -14.0, -51.0),
    ("au", "Australia", "澳大利亚", -25.0, 133.0),
    ("fr", "France", "法国", 46.0, 2.0),
    ("jp", "Japan", "日本", 36.0, 138.0),
    ("in", "India", "印度", 20.0, 78.0),
    ("gb", "United Kingdom", "英国", 55.0, -3.0),
    ("ca", "Canada", "加拿大", 56.0, -106.0),
    ("cn", "China", "中国", 35.0, 104.0),
    ("eg", "Egypt", "埃及", 26.0, 30.0),
    ("za", "South Africa", "南非", -30.0, 24.0),
    ("ru", "Russia", "俄罗斯", 61.0, 105.0),
    ("mx", "Mexico", "墨西哥", 23.0, -102.0),
    ("ar", "Argentina", "阿根廷", -38.0, -63.0),
    ("th", "Thailand", "泰国", 15.0, 100.0),
    ("it", "Italy", "意大利", 41.0, 12.0),
    ("es", "Spain", "西班牙", 40.0, -3.0),
    ("tr", "Turkey", "土耳其", 38.0, 35.0),
    ("id", "Indonesia", "印度尼西亚", -0.7, 113.0),
    ("sa", "Saudi Arabia", "沙特阿拉伯", 23.0, 45.0),
    ("de", "Germany", "德国", 51.0, 10.0),
    ("kr", "South Korea", "韩国", 36.0, 127.0),
    ("nz", "New Zealand", "新西兰", -40.0, 174.0),
    ("se", "Sweden", "瑞典", 60.0, 18.0),
    ("gr", "Greece", "希腊", 39.0, 22.0),
    ("no", "Norway", "挪威", 60.0, 8.0),
    ("ke", "Kenya", "肯尼亚", -1.0, 38.0),
    ("pe", "Peru", "秘鲁", -9.0, -75.0),
    ("vn", "Vietnam", "越南", 14.0, 108.0),
    ("pl", "Poland", "波兰", 52.0, 19.0),
    ("ch", "Switzerland", "瑞士", 47.0, 8.0),
    ("cl", "Chile", "智利", -35.0, -71.0),
    ("my", "Malaysia", "马来西亚", 4.0, 101.0),
    ("fi", "Finland", "芬兰", 61.0, 25.0),
    ("nl", "Netherlands", "荷兰", 52.0, 5.0),
    ("at", "Austria", "奥地利", 47.0, 14.0),
    ("pt", "Portugal", "葡萄牙", 39.0, -8.0),
    ("cz", "Czech Republic", "捷克", 49.0, 15.0),
    ("hu", "Hungary", "匈牙利", 47.0, 19.0),
    ("ie", "Ireland", "爱尔兰", 53.0, -8.0),
    ("ph", "Philippines", "菲律宾", 13.0, 121.0),
    ("pk", "Pakistan", "巴基斯坦", 30.0, 69.0),
    ("is", "Iceland", "冰岛", 64.0, -18.0),
    ("il", "Israel", "以色列", 31.0, 35.0),
    ("ua", "Ukraine", "乌克兰", 48.0, 31.0),
    ("dz", "Algeria", "阿尔及利亚", 28.0, 1.0),
    ("ng", "Nigeria", "尼日利亚", 9.0, 8.0),
    ("ma", "Morocco", "摩洛哥", 31.0, -7.0),
    ("sg", "Singapore", "新加坡", 1.3, 103.0),
    ("co", "Colombia", "哥伦比亚", 4.0, -74.0),
    ("kh", "Cambodia", "柬埔寨", 12.0, 104.0),
];

/// The pool that ships with the crate.
pub fn builtin_countries() -> Vec<CountryEntry> {
    BUILTIN
        .iter()
        .map(|&(id, name, local_name, lat, lon)| CountryEntry {
            id: id.to_string(),
            name: name.to_string(),
            local_name: local_name.to_string(),
            lat,
            lon,
        })
        .collect()
}

/// Parse a pool from JSON text and validate it.
pub fn parse_countries(raw: &str) -> Result<Vec<CountryEntry>> {
    let pool: Vec<CountryEntry> = serde_json::from_str(raw)?;
    validate_pool(&pool)?;
    Ok(pool)
}

/// Load an external pool file.
pub fn load_countries(path: &Path) -> Result<Vec<CountryEntry>> {
    let raw = std::fs::read_to_string(path)?;
    parse_countries(&raw)
}

/// Fail-fast checks shared by every pool source.
pub fn validate_pool(pool: &[CountryEntry]) -> Result<()> {
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    let mut seen = HashSet::new();
    for entry in pool {
        if !seen.insert(entry.id.as_str()) {
            return Err(GameError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(())
}
