//! The authoritative activity checklist catalog.
//!
//! One table maps each work activity to its ordered question list; the
//! expected question count for an activity is the length of its list.
//! Activities not present in the catalog fall back to a count of 10.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Expected question count for activities missing from the catalog
pub const FALLBACK_QUESTION_COUNT: usize = 10;

/// Activity name → ordered checklist questions, in display order
static CATALOG: &[(&str, &[&str])] = &[
    (
        "Excavation Work",
        &[
            "Is excavation permit available at site?",
            "Are edges protected with barricades?",
            "Is safe access/egress provided?",
            "Is shoring/shuttering properly installed?",
            "Are utilities identified and marked?",
            "Is excavated soil stored away from the edge?",
            "Is dewatering arranged where required?",
            "Is daily inspection of the excavation recorded?",
        ],
    ),
    (
        "Scaffolding",
        &[
            "Is scaffolding inspection done?",
            "Are toe boards installed?",
            "Is access ladder properly secured?",
            "Are workers using harnesses?",
            "Is scaffolding tagged (Green/Red)?",
            "Are base plates and sole boards in place?",
            "Is the scaffold tied to the structure?",
            "Are guard rails fitted at working platforms?",
            "Is the working platform fully boarded?",
            "Is safe distance kept from overhead lines?",
        ],
    ),
    (
        "Concrete Work",
        &[
            "Is formwork inspection done?",
            "Are workers wearing safety shoes?",
            "Is vibrator in good condition?",
            "Are shuttering supports adequate?",
            "Is curing method identified?",
            "Are workers using gloves and eye protection?",
            "Is pour card approved before casting?",
            "Is safe access provided to the pour location?",
            "Are concrete pump lines secured?",
            "Are protruding rebar ends capped?",
            "Is housekeeping maintained around the pour?",
            "Is lighting adequate for night pours?",
        ],
    ),
    (
        "Steel Erection",
        &[
            "Is steel erection plan available?",
            "Are connections properly secured?",
            "Is crane operator certified?",
            "Are workers using double lanyard?",
            "Is area below barricaded?",
            "Are tag lines used for load control?",
            "Are lifting lugs inspected before use?",
            "Is wind speed checked before lifting?",
            "Are bolts torqued as per drawing?",
        ],
    ),
    (
        "Electrical Work",
        &[
            "Is electrical work permit available?",
            "Is LOTO procedure followed?",
            "Are insulated tools being used?",
            "Is qualified electrician present?",
            "Is voltage testing done before work?",
            "Are ELCBs/RCDs provided on supply boards?",
            "Are cables routed off the ground?",
            "Are panels kept closed and labelled?",
            "Is rubber matting provided at panels?",
            "Are extension boards free of damage?",
            "Is earthing continuity verified?",
        ],
    ),
    (
        "Painting Work",
        &[
            "Is the paint store ventilated and flammables segregated?",
            "Are painters using respiratory protection?",
            "Are MSDS available for paints and thinners?",
            "Is hot work prohibited near the painting area?",
            "Are ladders and platforms stable for painting at height?",
            "Are empty containers disposed of correctly?",
            "Is the work area cordoned off?",
        ],
    ),
    (
        "Welding Work",
        &[
            "Is the welding machine inspected and tagged?",
            "Are cables and holders free of damage?",
            "Is the welder qualified for the job?",
            "Are welding screens placed around the work?",
            "Is fire extinguisher available nearby?",
            "Is the area cleared of combustibles?",
            "Are gas cylinders stored upright and secured?",
            "Are flashback arrestors fitted?",
            "Is proper PPE (shield, gloves, apron) worn?",
            "Is ventilation adequate in the welding area?",
        ],
    ),
    (
        "Hot Work",
        &[
            "Is hot work permit available?",
            "Is fire extinguisher available nearby?",
            "Is the area cleared of combustibles?",
            "Are welders wearing proper PPE?",
            "Is fire watch assigned?",
            "Are nearby drains and openings covered?",
            "Are cylinders fitted with flashback arrestors?",
            "Is the area checked after work completion?",
        ],
    ),
    (
        "Work at Height",
        &[
            "Is work at height permit available?",
            "Are workers using proper fall protection?",
            "Is the work area barricaded below?",
            "Are ladders and platforms in good condition?",
            "Is rescue plan in place?",
            "Are anchor points identified and adequate?",
            "Are tools secured against dropping?",
            "Is weather suitable for work at height?",
            "Are fragile surfaces identified and protected?",
        ],
    ),
    (
        "Material Handling",
        &[
            "Are walkways clear for material movement?",
            "Are workers trained in manual handling?",
            "Are mechanical aids used for heavy loads?",
            "Is the storage area stable and organized?",
            "Are slings and hooks inspected?",
            "Are loads within safe working limits?",
        ],
    ),
];

/// Selectable activities without a catalogued question list; these take
/// [`FALLBACK_QUESTION_COUNT`]
static EXTRA_ACTIVITIES: &[&str] = &[
    "Lifting Operations",
    "Confined Space Entry",
    "Demolition Work",
];

static BY_NAME: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| CATALOG.iter().copied().collect());

/// Selectable work activities, in display order
pub fn activities() -> Vec<&'static str> {
    CATALOG
        .iter()
        .map(|(name, _)| *name)
        .chain(EXTRA_ACTIVITIES.iter().copied())
        .collect()
}

/// The ordered question list for an activity, if catalogued
pub fn questions_for(activity: &str) -> Option<&'static [&'static str]> {
    BY_NAME.get(activity).copied()
}

/// Expected question count for an activity, with the fallback for
/// unknown activities
pub fn expected_count(activity: &str) -> usize {
    questions_for(activity)
        .map(|questions| questions.len())
        .unwrap_or(FALLBACK_QUESTION_COUNT)
}
