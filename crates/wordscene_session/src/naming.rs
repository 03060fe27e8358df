//! Random names for unnamed word lists.

use rand::Rng;
use rand::seq::SliceRandom;

const ADJECTIVES: [&str; 8] = ["晨光", "星辰", "月影", "云端", "海风", "山林", "花语", "雨露"];
const NOUNS: [&str; 6] = ["词库", "记忆", "宝典", "手册", "笔记", "集锦"];

/// Picks a name such as "星辰笔记417".
pub fn random_list_name<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or(ADJECTIVES[0]);
    let noun = NOUNS.choose(rng).copied().unwrap_or(NOUNS[0]);
    let number: u32 = rng.gen_range(0..1000);
    format!("{adjective}{noun}{number}")
}
