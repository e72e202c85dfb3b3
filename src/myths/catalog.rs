use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use super::normalize::normalize_claim;
use super::types::{ClaimRecord, MythError, Verdict};

/// Identifier of the general guidance record.
pub const GENERAL_RESULT_ID: &str = "general";

/// The fixed set of known claims, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MythCatalog {
    records: Vec<ClaimRecord>,
    fallback: ClaimRecord,
}

static BUILTIN_CATALOG: LazyLock<Arc<MythCatalog>> = LazyLock::new(|| {
    let catalog = MythCatalog::from_records(builtin_records(), general_result())
        .expect("Invalid built-in myth catalog");
    Arc::new(catalog)
});

impl MythCatalog {
    /// The bundled catalog. Built once per process.
    pub fn builtin() -> Arc<MythCatalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    /// Build a catalog after checking every record is usable.
    pub fn from_records(
        records: Vec<ClaimRecord>,
        fallback: ClaimRecord,
    ) -> Result<Self, MythError> {
        validate(&records, &fallback)?;
        Ok(Self { records, fallback })
    }

    /// Load a catalog override from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MythError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            MythError::CatalogRead(path.display().to_string(), e.to_string())
        })?;
        let file: CatalogFile = serde_json::from_str(&json).map_err(|e| {
            MythError::CatalogParse(path.display().to_string(), e.to_string())
        })?;

        let catalog = Self::from_records(file.records, file.fallback)?;
        tracing::info!(
            path = %path.display(),
            records = catalog.len(),
            "Loaded myth catalog override"
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    pub fn fallback(&self) -> &ClaimRecord {
        &self.fallback
    }

    pub fn get(&self, id: &str) -> Option<&ClaimRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// On-disk layout of a catalog override.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    records: Vec<ClaimRecord>,
    fallback: ClaimRecord,
}

fn validate(records: &[ClaimRecord], fallback: &ClaimRecord) -> Result<(), MythError> {
    if records.is_empty() {
        return Err(MythError::InvalidCatalog("catalog has no records".into()));
    }

    let mut seen = HashSet::new();
    for record in records {
        if record.id.trim().is_empty() {
            return Err(MythError::InvalidCatalog(format!(
                "record '{}' has an empty id",
                record.claim
            )));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(MythError::InvalidCatalog(format!(
                "duplicate record id '{}'",
                record.id
            )));
        }
        if record.patterns.is_empty() {
            return Err(MythError::InvalidCatalog(format!(
                "record '{}' has no patterns",
                record.id
            )));
        }
        for pattern in &record.patterns {
            if pattern.is_empty() || normalize_claim(pattern) != *pattern {
                return Err(MythError::InvalidCatalog(format!(
                    "pattern '{}' in record '{}' is not normalized",
                    pattern, record.id
                )));
            }
        }
        validate_guidance(record)?;
    }

    if seen.contains(fallback.id.as_str()) {
        return Err(MythError::InvalidCatalog(format!(
            "fallback id '{}' collides with a record",
            fallback.id
        )));
    }
    if fallback.verdict != Verdict::Depends {
        return Err(MythError::InvalidCatalog(format!(
            "fallback verdict must be Depends, got {}",
            fallback.verdict
        )));
    }
    validate_guidance(fallback)
}

/// Every result shown to a user carries advice and escalation signs.
fn validate_guidance(record: &ClaimRecord) -> Result<(), MythError> {
    if record.safe_advice.is_empty() {
        return Err(MythError::InvalidCatalog(format!(
            "record '{}' has no safe advice",
            record.id
        )));
    }
    if record.escalation_signs.is_empty() {
        return Err(MythError::InvalidCatalog(format!(
            "record '{}' has no escalation signs",
            record.id
        )));
    }
    Ok(())
}

// ── Bundled records ─────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    claim: &str,
    patterns: &[&str],
    verdict: Verdict,
    explanation: &str,
    safe_advice: &[&str],
    escalation_signs: &[&str],
    source_label: &str,
) -> ClaimRecord {
    ClaimRecord {
        id: id.into(),
        claim: claim.into(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        verdict,
        explanation: explanation.into(),
        safe_advice: safe_advice.iter().map(|s| s.to_string()).collect(),
        escalation_signs: escalation_signs.iter().map(|s| s.to_string()).collect(),
        source_label: source_label.into(),
    }
}

fn general_result() -> ClaimRecord {
    record(
        GENERAL_RESULT_ID,
        "Unknown Statement",
        &[],
        Verdict::Depends,
        "We couldn't find a specific match for this statement. Pregnancy health is complex and varies for everyone.",
        &[
            "Consult your primary healthcare provider",
            "Focus on a balanced diet and moderate activity",
            "Listen to your body's signals",
        ],
        &[
            "You have sharp pain or unusual bleeding",
            "You have a fever over 100.4\u{00b0}F",
            "You feel something is 'just not right'",
        ],
        "Nurture Glow General Guidance",
    )
}

fn builtin_records() -> Vec<ClaimRecord> {
    vec![
        record(
            "m1",
            "Is caffeine safe during pregnancy?",
            &["coffee", "caffeine", "tea", "কফি", "ক্যাফেইন", "চা"],
            Verdict::Depends,
            "Moderate amounts of caffeine (less than 200mg per day) are generally considered safe. This is roughly one 12oz cup of coffee.",
            &[
                "Stick to one small cup a day",
                "Try decaf alternatives",
                "Check caffeine in sodas and chocolate",
            ],
            &[
                "Experience heart palpitations",
                "Have trouble sleeping despite low intake",
            ],
            "ACOG Guidelines",
        ),
        record(
            "m2",
            "Spicy food can cause miscarriage or induce labor.",
            &["spicy food", "ঝাল খাবার", "spicy", "chili"],
            Verdict::False,
            "Spicy food is perfectly safe for the baby, though it might cause you significant heartburn or indigestion.",
            &[
                "Eat small portions",
                "Avoid lying down immediately after eating spicy food",
            ],
            &["Indigestion is accompanied by severe abdominal pain"],
            "NHS UK",
        ),
        record(
            "m3",
            "You should never sleep on your back after the first trimester.",
            &["sleeping on back", "চিত হ\u{09df}ে ঘুমানো", "sleep position", "ঘুমানোর পজিশন"],
            Verdict::True,
            "Sleeping on your back can compress the vena cava, reducing blood flow to the placenta. Left side is generally best.",
            &[
                "Use a pregnancy pillow for support",
                "Don't panic if you wake up on your back, just roll over",
            ],
            &["Feeling dizzy or breathless when lying flat"],
            "Mayo Clinic",
        ),
        record(
            "m4",
            "Dyeing your hair is dangerous for the baby.",
            &["hair dye", "coloring hair", "চুলে রঙ", "হে\u{09df}ার ডাই"],
            Verdict::False,
            "Most research shows the chemicals in hair dye are not absorbed in large enough amounts to cause harm.",
            &[
                "Wait until the second trimester for extra peace of mind",
                "Ensure the room is well-ventilated",
            ],
            &["Experience an allergic reaction to the dye"],
            "WebMD Health",
        ),
        record(
            "m5",
            "Exercise is dangerous during pregnancy.",
            &["exercise", "gym", "lifting", "ব্যা\u{09df}াম", "জিম"],
            Verdict::False,
            "Regular, moderate exercise is actually highly recommended and can make labor easier and recovery faster.",
            &[
                "Keep intensity moderate (should be able to talk)",
                "Avoid contact sports",
                "Stay hydrated",
            ],
            &["Dizziness", "Vaginal bleeding", "Chest pain during activity"],
            "CDC Guidelines",
        ),
        record(
            "m6",
            "Flying is unsafe for pregnant women.",
            &["flying", "airplane", "travel", "বিমানে ভ্রমণ", "ভ্রমণ"],
            Verdict::False,
            "Flying is generally safe up to 36 weeks if you have a low-risk pregnancy. Cabin pressure is not a risk.",
            &[
                "Walk every hour to prevent blood clots",
                "Wear compression socks",
                "Keep your medical records handy",
            ],
            &[
                "You have a history of blood clots",
                "Experiencing cramping while traveling",
            ],
            "IATA Medical Manual",
        ),
        record(
            "m7",
            "Morning sickness only happens in the morning.",
            &["morning sickness", "বমি বমি ভাব", "vomiting", "nausea"],
            Verdict::False,
            "Nausea and vomiting can happen at any time of the day or night due to hormonal changes.",
            &[
                "Eat small, frequent meals",
                "Ginger tea or lozenges can help",
                "Keep crackers by your bedside",
            ],
            &[
                "Cannot keep any fluids down for 24 hours",
                "Significant weight loss",
            ],
            "Healthline",
        ),
        record(
            "m8",
            "Too many ultrasounds can harm the baby.",
            &["ultrasound", "scan", "আল্ট্রাসাউন্ড", "স্ক্যান"],
            Verdict::False,
            "Ultrasounds use sound waves, not radiation. There is no evidence that diagnostic scans cause harm.",
            &[
                "Follow your doctor's recommended scan schedule",
                "Avoid 'keepsake' 3D/4D scans in non-medical facilities",
            ],
            &["You have concerns about a specific scan result"],
            "FDA",
        ),
        record(
            "m9",
            "Eating papaya causes miscarriage.",
            &["papaya", "পেঁপে", "fruit"],
            Verdict::Depends,
            "Ripe papaya is safe. However, unripe or semi-ripe papaya contains latex which can trigger uterine contractions.",
            &[
                "Only eat fully yellow/orange, soft papaya",
                "Avoid green papaya salads during pregnancy",
            ],
            &["Experience cramping after consuming unripe fruit"],
            "Nutrition Reviews",
        ),
        record(
            "m10",
            "Severe heartburn means the baby will have lots of hair.",
            &["heartburn", "hairy baby", "বুক জ্বালাপো\u{09dc}া", "চুল"],
            Verdict::Mixed,
            "While often dismissed as a myth, some studies suggest a link because the same hormones that cause heartburn also influence fetal hair growth.",
            &[
                "Eat smaller meals",
                "Avoid spicy/fatty foods before bed",
                "Sleep with your head elevated",
            ],
            &["Heartburn prevents eating or sleeping"],
            "Johns Hopkins Study",
        ),
        record(
            "m11",
            "You need to eat twice as much food when pregnant.",
            &["eating for two", "double food", "বেশি খাও\u{09df}া"],
            Verdict::False,
            "You only need about 300 extra calories per day in the 2nd trimester and 450 in the 3rd. Quality matters more than quantity.",
            &[
                "Focus on nutrient-dense foods",
                "Include plenty of leafy greens and proteins",
            ],
            &["Rapid or no weight gain over several weeks"],
            "Dietary Guidelines for Americans",
        ),
        record(
            "m12",
            "You must get rid of your cat when you get pregnant.",
            &["cats", "litter", "toxoplasmosis", "বি\u{09dc}াল", "মল"],
            Verdict::False,
            "You don't need to lose your pet, but you must avoid the litter box. Cat feces can carry toxoplasmosis, which is dangerous.",
            &[
                "Have someone else change the litter",
                "If you must do it, wear gloves and a mask",
                "Wash hands thoroughly after petting",
            ],
            &["Flu-like symptoms after contact with cat waste"],
            "CDC",
        ),
        record(
            "m13",
            "Hot tubs and saunas are safe during pregnancy.",
            &["hot tub", "sauna", "bath", "গরম পানি", "গোসল"],
            Verdict::False,
            "Raising your core body temperature above 101\u{00b0}F (38.3\u{00b0}C) for too long can cause birth defects, especially in the first trimester.",
            &[
                "Stick to warm (not hot) baths",
                "Limit time in warm water to 10-15 minutes",
            ],
            &["Feeling faint or overheated after a bath"],
            "ACOG",
        ),
        record(
            "m14",
            "Sex can hurt the baby.",
            &["sex", "intercourse", "মিলন"],
            Verdict::False,
            "The baby is well-protected by the amniotic sac and the strong muscles of the uterus. Sex is safe unless your doctor says otherwise.",
            &[
                "Experiment with comfortable positions",
                "Talk to your partner about changes in libido",
            ],
            &[
                "Bleeding or fluid leakage after intercourse",
                "History of preterm labor",
            ],
            "Planned Parenthood",
        ),
        record(
            "m15",
            "Pineapple can cause labor or miscarriage.",
            &["pineapple", "আনারস", "bromelain"],
            Verdict::False,
            "You would have to eat massive, unrealistic quantities of pineapple for the bromelain (enzyme) to have any effect on the cervix.",
            &[
                "Enjoy fresh pineapple in normal food amounts",
                "Great source of Vitamin C",
            ],
            &["Allergic reaction or severe digestive upset"],
            "Medical News Today",
        ),
    ]
}
