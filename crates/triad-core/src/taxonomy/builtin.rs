//! The standard 64-record trait table.

use super::TraitRecord;

type Row = (u8, &'static str, &'static [&'static str], &'static str, &'static str, &'static str);

const TABLE: [Row; 64] = [
    (1, "The Creative", &["creative power", "leadership", "strong drive", "heavenly force"], "decisiveness and execution", "prone to arrogance", "yang/assertive/upward-oriented"),
    (2, "The Receptive", &["receptivity", "embracing capacity", "flexible nature", "grace of the earth"], "harmony and cooperation", "lack of initiative", "yin/passive/stability-oriented"),
    (3, "Difficulty at the Beginning", &["initiation", "overcoming hardship", "founder's struggle", "latent potential"], "power to push through hardship", "confusion from being unprepared", "dynamic/challenging/growth-oriented"),
    (4, "Youthful Folly", &["education", "learning", "enlightenment", "guidance"], "accumulating knowledge and passing it on", "misjudgment from inexperience", "learning/growing/receptivity-oriented"),
    (5, "Waiting", &["waiting", "endurance", "preparation", "the time arriving"], "waiting for the right moment", "missed opportunities from delayed action", "waiting/patient/preparation-oriented"),
    (6, "Conflict", &["dispute", "confrontation", "legal resolution", "justice"], "seeking a fair resolution", "prolonged confrontation", "confrontational/competitive/justice-oriented"),
    (7, "The Army", &["organization", "command", "military", "discipline"], "organized action", "rigidity and lack of flexibility", "controlling/organized/discipline-oriented"),
    (8, "Holding Together", &["affinity", "cooperation", "solidarity", "mutual support"], "building cooperative relationships", "lack of independence through dependency", "cooperative/affiliative/solidarity-oriented"),
    (9, "The Taming Power of the Small", &["small accumulation", "preparation", "flexible nature", "adjustment"], "attentive care and fine adjustment", "responses too small in scale", "accumulating/adjusting/flexibility-oriented"),
    (10, "Treading", &["courtesy", "caution", "dignity", "the right path"], "dignified conduct", "stagnation from excessive caution", "dignified/cautious/right-path-oriented"),
    (11, "Peace", &["harmony", "interaction", "peace", "prosperity"], "smooth exchange between high and low", "complacency with the status quo", "harmonious/interacting/integration-oriented"),
    (12, "Standstill", &["blockage", "stagnation", "severance", "need for transformation"], "power to break a deadlock", "breakdown in communication", "separating/inward/transformation-oriented"),
    (13, "Fellowship with Men", &["collaboration", "comrades", "impartiality", "solidarity"], "building fair partnerships", "exclusivity from in-group thinking", "collaborative/fair/solidarity-oriented"),
    (14, "Possession in Great Measure", &["abundance", "success", "prosperity", "integration"], "using ample resources well", "complacency from success", "abundant/successful/integration-oriented"),
    (15, "Modesty", &["humility", "low profile", "virtue", "respect"], "earning trust through humility", "too little self-assertion", "humble/receptive/virtue-oriented"),
    (16, "Enthusiasm", &["joy", "liveliness", "preparation", "optimism"], "positive vitality", "unpreparedness from carelessness", "lively/optimistic/preparation-oriented"),
    (17, "Following", &["following", "flexible nature", "adaptation", "responding to change"], "flexible adaptation to change", "lack of initiative", "adaptive/flexible/following-oriented"),
    (18, "Work on What Has Been Spoiled", &["decay", "reform", "regeneration", "renewal"], "problem solving and reform", "difficulty of reform", "reforming/regenerating/renewal-oriented"),
    (19, "Approach", &["approach", "guidance", "warmth", "embracing"], "warm leadership", "leniency that invites dependence", "guiding/warm/embracing-oriented"),
    (20, "Contemplation", &["observation", "insight", "understanding", "objectivity"], "deep insight", "insufficient drive to act", "observant/insightful/objectivity-oriented"),
    (21, "Biting Through", &["decision", "judgment", "removal", "resolution"], "resolving problems at the root", "overly harsh judgment", "decisive/judging/resolution-oriented"),
    (22, "Grace", &["adornment", "beautification", "culture", "elegance"], "aesthetic sense and expressiveness", "neglecting substance for appearance", "aesthetic/cultural/adornment-oriented"),
    (23, "Splitting Apart", &["stripping away", "decline", "erosion", "endurance"], "endurance in hard times", "helplessness in decline", "enduring/passive/defense-oriented"),
    (24, "Return", &["revival", "recovery", "regeneration", "hope"], "power of revival and regeneration", "slow recovery", "reviving/regenerating/hope-oriented"),
    (25, "Innocence", &["purity", "naturalness", "innocence", "guilelessness"], "pure and natural action", "failure from naivety", "pure/natural/innocence-oriented"),
    (26, "The Taming Power of the Great", &["accumulation", "restraint", "preparation", "storing strength"], "ability to accumulate great strength", "delayed action", "accumulating/restraining/preparation-oriented"),
    (27, "The Corners of the Mouth", &["nourishment", "nutrition", "self-control", "temperance"], "proper nourishment and self-control", "stagnation from excessive restriction", "nurturing/temperate/self-control-oriented"),
    (28, "Preponderance of the Great", &["excess", "danger", "heavy burden", "extremity"], "coping in extreme situations", "risk of collapse from excess", "extreme/dangerous/excess-oriented"),
    (29, "The Abysmal", &["deep insight", "crisis management", "caution at the brink", "introspection"], "sensing risk", "excessive pessimism", "fluid/adaptive/depth-oriented"),
    (30, "The Clinging", &["clarity", "passion", "illumination", "civilization"], "shedding light on things", "prone to burnout", "radiating/illuminating/outward-oriented"),
    (31, "Influence", &["responsiveness", "resonance", "mutual influence", "susceptibility"], "deep empathy with others", "excessive emotional involvement", "resonant/responsive/mutuality-oriented"),
    (32, "Duration", &["persistence", "continuity", "immutability", "permanence"], "sustained effort", "difficulty adapting to change", "sustaining/continuous/constancy-oriented"),
    (33, "Retreat", &["retreat", "strategic withdrawal", "self-preservation", "biding time"], "knowing when to step back", "overly passive stance", "withdrawing/conservative/waiting-oriented"),
    (34, "The Power of the Great", &["great strength", "might", "valor", "assertiveness"], "powerful capacity for action", "failure from overeagerness", "powerful/assertive/valor-oriented"),
    (35, "Progress", &["progress", "promotion", "improvement", "development"], "steady progress", "failure from haste", "progressive/improving/development-oriented"),
    (36, "Darkening of the Light", &["hardship", "darkness", "endurance", "latency"], "endurance in hard times", "passive stance", "latent/enduring/inward-oriented"),
    (37, "The Family", &["family", "harmony", "order", "affinity"], "domestic harmony", "too inward-looking a view", "domestic/harmonious/affinity-oriented"),
    (38, "Opposition", &["confrontation", "estrangement", "contradiction", "discord"], "growth through opposition", "deteriorating relationships", "opposing/contradictory/separation-oriented"),
    (39, "Obstruction", &["hardship", "obstacle", "stagnation", "endurance"], "power to endure hardship", "difficulty moving forward", "stagnant/enduring/introspection-oriented"),
    (40, "Deliverance", &["resolution", "liberation", "easing", "opening"], "problem-solving ability", "letting one's guard down after resolution", "resolving/open/easing-oriented"),
    (41, "Decrease", &["humility", "reduction", "focus on essentials", "elimination of waste"], "discerning the essential", "excessive self-sacrifice", "reducing/essential/inward-oriented"),
    (42, "Increase", &["benefit", "increase", "growth", "development"], "creating mutual benefit", "overemphasis on profit", "increasing/growing/development-oriented"),
    (43, "Break-through", &["decision", "elimination", "removal", "severance"], "clear decisiveness", "overly hasty judgment", "decisive/excluding/severance-oriented"),
    (44, "Coming to Meet", &["encounter", "meeting by chance", "chance", "meeting"], "power of new encounters", "unexpected difficulty", "encountering/chance/meeting-oriented"),
    (45, "Gathering Together", &["gathering", "rallying", "integration", "solidarity"], "uniting a group", "difficulty leading", "gathering/integrating/solidarity-oriented"),
    (46, "Pushing Upward", &["ascent", "growth", "maturation", "improvement"], "steady growth", "slowing growth", "upward/growing/improvement-oriented"),
    (47, "Oppression", &["destitution", "predicament", "constraint", "limits"], "ingenuity under hardship", "constraints from scarce resources", "straitened/constrained/limit-oriented"),
    (48, "The Well", &["wellspring", "supply", "stability", "constancy"], "stable supply", "difficulty adapting to change", "wellspring/providing/stability-oriented"),
    (49, "Revolution", &["revolution", "transformation", "reform", "renewal"], "innovative transformation", "confusion from upheaval", "innovative/transformative/renewal-oriented"),
    (50, "The Caldron", &["establishment", "completion", "stability", "governance"], "stable governance", "overly conservative stance", "establishing/completing/governance-oriented"),
    (51, "The Arousing", &["shock", "activity", "agitation", "stimulation"], "powerful activity", "impulsive action", "shocking/active/stimulation-oriented"),
    (52, "Keeping Still", &["stillness", "meditation", "immovability", "stability"], "unshakable stability", "resistance to change", "still/immovable/meditation-oriented"),
    (53, "Development", &["gradual advance", "step by step", "steady", "moderation"], "steady step-by-step progress", "slow progress", "gradual/stepwise/moderation-oriented"),
    (54, "The Marrying Maiden", &["union", "marriage", "integration", "harmony"], "integrating differences", "difficulty of integration", "uniting/integrating/harmony-oriented"),
    (55, "Abundance", &["plenty", "fulfillment", "glory", "zenith"], "rich fulfillment", "arrogance at the peak", "plentiful/fulfilled/glory-oriented"),
    (56, "The Wanderer", &["travel", "movement", "change", "exploration"], "adapting to changing environments", "anxiety from an unstable position", "moving/changing/exploration-oriented"),
    (57, "The Gentle", &["flexible", "penetration", "adaptability", "influence"], "flexible penetration", "weak will", "flexible/penetrating/adaptability-oriented"),
    (58, "The Joyous", &["joy", "amusement", "friendliness", "interaction"], "affinity with people", "losing trust through frivolity", "joyful/affiliative/interaction-oriented"),
    (59, "Dispersion", &["dispersal", "scattering", "diffusion", "liberation"], "flexible power to spread", "difficulty keeping control", "dispersing/scattering/release-oriented"),
    (60, "Limitation", &["temperance", "regulation", "measure", "restriction"], "appropriate control", "excessive constraint", "temperate/regulating/restriction-oriented"),
    (61, "Inner Truth", &["sincerity", "trust", "true heart", "inner substance"], "building deep trust", "overly innocent trust", "sincere/trusting/true-heart-oriented"),
    (62, "Preponderance of the Small", &["small mistakes", "fine adjustment", "humility", "caution"], "fine adjustment", "overly timid stance", "adjusting/humble/caution-oriented"),
    (63, "After Completion", &["completion", "achievement", "harmony", "perfection"], "bringing things to completion", "difficulty moving to what is next", "completing/harmonious/stability-oriented"),
    (64, "Before Completion", &["unfinished", "continuity", "possibility", "eternal challenge"], "limitless possibility", "anxiety about completion", "continuing/challenging/future-oriented"),
];

pub(super) fn records() -> Vec<TraitRecord> {
    TABLE
        .iter()
        .map(|&(id, name, keywords, strength, weakness, energy)| TraitRecord {
            id,
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            strength: strength.to_string(),
            weakness: weakness.to_string(),
            energy: energy.to_string(),
        })
        .collect()
}
