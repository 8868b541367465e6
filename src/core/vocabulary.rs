//! Built-in pattern vocabularies
//!
//! Plain data: each entry is one regex rule, compiled case-insensitively by
//! `RuleSet`. Word boundaries are written into the patterns themselves.

/// Analytical / implementation language
pub const TECHNICAL: &[&str] = &[
    // Programming constructs
    r"\bfunction\b", r"\bclass\b", r"\bmethod\b", r"\bvariable\b",
    r"\barray\b", r"\bobject\b", r"\bloop\b", r"\bif\s*\(", r"\belse\b",
    r"\breturn\b", r"\bimport\b", r"\bexport\b", r"\bconst\b", r"\blet\b",
    r"\bvar\b", r"\basync\b", r"\bawait\b", r"\btry\b", r"\bcatch\b",
    // Technical concepts
    r"\bAPI\b", r"\bREST\b", r"\bJSON\b", r"\bXML\b", r"\bHTTP\b",
    r"\bdatabase\b", r"\bquery\b", r"\bschema\b", r"\btable\b",
    r"\balgorithm\b", r"\bdata structure\b", r"\bcomplexity\b",
    r"\boptimization\b", r"\bperformance\b", r"\blatency\b",
    // Development terms
    r"\bdebug\b", r"\btest\b", r"\bdeploy\b", r"\bbuild\b", r"\bcompile\b",
    r"\brefactor\b", r"\bcommit\b", r"\bmerge\b", r"\bbranch\b",
    r"\bframework\b", r"\blibrary\b", r"\bpackage\b", r"\bmodule\b",
    // Technical actions
    r"\bimplement\b", r"\bconfigure\b", r"\bintegrate\b", r"\binstall\b",
    r"\bexecute\b", r"\binitialize\b", r"\bprocess\b", r"\bcompute\b",
    r"\bcalculate\b", r"\banalyze\b", r"\bvalidate\b", r"\bverify\b",
    // Data and metrics
    r"\bdata\b", r"\bmetric\b", r"\bmeasure\b", r"\bstatistic\b",
    r"\bparameter\b", r"\bconfiguration\b", r"\bsetting\b",
    r"\berror\b", r"\bexception\b", r"\bwarning\b", r"\blog\b",
    // Architecture
    r"\barchitecture\b", r"\bdesign pattern\b", r"\bMVC\b", r"\bmicroservice\b",
    r"\bcontainer\b", r"\bDocker\b", r"\bKubernetes\b", r"\bcloud\b",
    r"\bserver\b", r"\bclient\b", r"\bendpoint\b", r"\broute\b",
];

/// Human-connection language
pub const EMOTIONAL: &[&str] = &[
    // Feelings
    r"\bfeel\b", r"\bfeeling\b", r"\bfelt\b", r"\bemotional\b",
    r"\bhappy\b", r"\bsad\b", r"\bangry\b", r"\bexcited\b",
    r"\bworried\b", r"\banxious\b", r"\bfrustrated\b", r"\bproud\b",
    r"\bgrateful\b", r"\bthankful\b", r"\bappreciate\b",
    // Personal pronouns and connection
    r"\bI feel\b", r"\bI think\b", r"\bI believe\b", r"\bmy heart\b",
    r"\bpersonally\b", r"\bhonestly\b", r"\bsincerely\b",
    r"\btrust\b", r"\bconnection\b", r"\brelationship\b",
    // Supportive language
    r"\bthank you\b", r"\bthanks\b", r"\bplease\b", r"\bsorry\b",
    r"\bhelp\b", r"\bsupport\b", r"\bencourage\b", r"\bcare\b",
    r"\bunderstand\b", r"\bempathy\b", r"\bcompassion\b",
    // Collaborative expressions
    r"\btogether\b", r"\bwe can\b", r"\blet's\b", r"\bour\b",
    r"\bshare\b", r"\bcollaborate\b", r"\bteam\b", r"\bpartner\b",
    // Enthusiasm
    r"\bamazing\b", r"\bawesome\b", r"\bwonderful\b", r"\bbeautiful\b",
    r"\bincredible\b", r"\bfantastic\b", r"\bbrilliant\b",
    r"\b!+\b", r"\b♥\b", r"\b❤\b", r"\b😊\b", r"\b🙂\b",
    // Personal growth
    r"\bjourney\b", r"\bgrowth\b", r"\blearn\b", r"\bdiscover\b",
    r"\bexplore\b", r"\bdream\b", r"\bhope\b", r"\bwish\b",
    r"\binspire\b", r"\bmotivate\b", r"\bbelieve\b",
    // Human-centric
    r"\bhuman\b", r"\bperson\b", r"\bpeople\b", r"\bfriend\b",
    r"\bmentor\b", r"\bguide\b", r"\bteacher\b", r"\bstudent\b",
    r"\bcommunity\b", r"\bfamily\b", r"\blove\b", r"\bkind\b",
];

/// Hedging and admitted uncertainty
pub const UNCERTAINTY: &[&str] = &[
    r"\bmight\b", r"\bcould be\b", r"\bpossibly\b", r"\bperhaps\b",
    r"\bmaybe\b", r"\bI'?m not sure\b", r"\bI don'?t know\b",
    r"\buncertain\b", r"\bnot certain\b", r"\bnot clear\b",
    r"\bnot familiar\b", r"\bnot aware\b", r"\bif I recall correctly\b",
    r"\bto the best of my knowledge\b", r"\bI believe\b", r"\bI think\b",
];

/// References back to earlier conversation
pub const MEMORY: &[&str] = &[
    r"\bas we discussed\b", r"\byou mentioned\b", r"\brecall that\b",
    r"\bearlier you said\b", r"\bin our previous conversation\b",
    r"\blast time\b", r"\byou told me\b", r"\byou'?ve shared\b",
    r"\bwe talked about\b", r"\bwe discussed\b", r"\bwe covered\b",
    r"\bremember when\b", r"\bour last session\b", r"\bpreviously\b",
];

/// Self-correction and source attribution
pub const ATTRIBUTION: &[&str] = &[
    r"\blet me correct\b", r"\bto clarify\b", r"\bmore precisely\b",
    r"\bi should rephrase\b", r"\bi misspoke\b", r"\bi meant to say\b",
    r"\bto be more accurate\b", r"\bto be precise\b",
    r"\bi incorrectly stated\b", r"\bmore specifically\b",
    r"\baccording to\b", r"\bbased on\b", r"\bsource:\b", r"\breference:\b",
];

/// Explicit talk about balance itself
pub const BALANCE_AWARENESS: &[&str] = &[
    r"\bWelsh-?Winters Balance\b", r"\bperfect balance\b",
    r"\b0\.5\b", r"\bequilibrium\b", r"\bbalanced approach\b",
    r"\btechnical.*emotional\b", r"\bbalance.*technical.*emotional\b",
];
