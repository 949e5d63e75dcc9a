//! Built-in PII categories and their regex rules.
//!
//! Order matters: categories are scanned top to bottom and, within a category,
//! rules are scanned in the order listed. An earlier match claims its span and
//! any later overlapping match is dropped.
//!
//! Every rule is compiled case-insensitively. Rules that depend on
//! capitalisation (personal names, IBAN, VIN) opt out locally with `(?-i:...)`.

pub const PERSON: &str = "PERSON";
pub const PHONE: &str = "PHONE";
pub const EMAIL: &str = "EMAIL";
pub const SSN: &str = "SSN";
pub const ADDRESS: &str = "ADDRESS";
pub const CREDIT_CARD: &str = "CREDIT_CARD";
pub const DATE_OF_BIRTH: &str = "DATE_OF_BIRTH";
pub const DRIVER_LICENSE: &str = "DRIVER_LICENSE";
pub const PASSPORT: &str = "PASSPORT";
pub const BANK_ACCOUNT: &str = "BANK_ACCOUNT";
pub const IP_ADDRESS: &str = "IP_ADDRESS";
pub const MAC_ADDRESS: &str = "MAC_ADDRESS";
pub const USERNAME: &str = "USERNAME";
pub const MEDICAL_ID: &str = "MEDICAL_ID";
pub const COORDINATES: &str = "COORDINATES";
pub const VEHICLE_ID: &str = "VEHICLE_ID";

pub(crate) const BUILTIN_PATTERNS: &[(&str, &[&str])] = &[
    (
        PERSON,
        &[
            // Titled names: "Dr. Jane Smith", "Mrs Jones"
            r"\b(?-i:(?:Mr|Mrs|Ms|Dr|Prof)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b",
            // Two capitalised words
            r"\b(?-i:[A-Z][a-z]+ [A-Z][a-z]+)\b",
        ],
    ),
    (
        PHONE,
        &[
            r"(?:\+?1[-.\s]?)?\(\d{3}\)\s?\d{3}[-.\s]?\d{4}\b",
            r"(?:\+?\b1[-.\s]?)?\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        ],
    ),
    (
        EMAIL,
        &[r"\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b"],
    ),
    (
        SSN,
        &[r"\b\d{3}-\d{2}-\d{4}\b", r"\b\d{9}\b"],
    ),
    (
        ADDRESS,
        &[
            r"\b\d{1,6}\s+(?:[A-Z]+\s+){1,4}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Court|Ct|Way|Place|Pl|Terrace|Parkway|Pkwy)\b\.?",
        ],
    ),
    (
        CREDIT_CARD,
        &[
            r"\b(?:\d{4}[-\s]?){3}\d{4}\b",
            // Amex 4-6-5
            r"\b3[47]\d{2}[-\s]?\d{6}[-\s]?\d{5}\b",
        ],
    ),
    (
        DATE_OF_BIRTH,
        &[
            r"\b(?:0?[1-9]|1[0-2])[/-](?:0?[1-9]|[12]\d|3[01])[/-](?:19|20)\d{2}\b",
            r"\b(?:19|20)\d{2}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12]\d|3[01])\b",
            r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+(?:[12]\d|3[01]|0?[1-9])(?:st|nd|rd|th)?,?\s+(?:19|20)\d{2}\b",
        ],
    ),
    (
        DRIVER_LICENSE,
        &[
            r"\b(?:driver['’]?s?\s+licen[cs]e|DL)\s*(?:no\.?|num(?:ber)?|#)?\s*[:#]?\s*[A-Z]{0,2}\d[A-Z0-9-]{4,14}\b",
        ],
    ),
    (
        PASSPORT,
        &[r"\bpassport\s*(?:no\.?|num(?:ber)?|#)?\s*[:#]?\s*[A-Z]{0,2}\d{6,9}\b"],
    ),
    (
        BANK_ACCOUNT,
        &[
            r"\b(?:bank\s+)?(?:account|acct)\.?\s*(?:no\.?|num(?:ber)?|#)?\s*[:#]?\s*\d{6,17}\b",
            r"\b(?:routing|ABA)\s*(?:no\.?|num(?:ber)?|#)?\s*[:#]?\s*\d{9}\b",
            // IBAN
            r"\b(?-i:[A-Z]{2}\d{2}[A-Z0-9]{11,30})\b",
        ],
    ),
    (
        IP_ADDRESS,
        &[
            r"\b(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\b",
            r"\b(?:[0-9A-F]{1,4}:){7}[0-9A-F]{1,4}\b",
        ],
    ),
    (
        MAC_ADDRESS,
        &[r"\b(?:[0-9A-F]{2}[:-]){5}[0-9A-F]{2}\b"],
    ),
    (
        USERNAME,
        &[
            // @handle, but not the '@' inside an email address
            r"\B@[A-Z0-9_]{3,30}\b",
            r"\b(?:user\s*name|user|login|handle)\s*[:=]\s*[A-Z0-9._-]{3,30}\b",
        ],
    ),
    (
        MEDICAL_ID,
        &[
            r"\b(?:MRN|medical\s+record(?:\s+number)?|patient\s+id|member\s+id|health\s+plan\s+id|insurance\s+id)\s*(?:no\.?|num(?:ber)?|#)?\s*[:#]?\s*[A-Z]{0,3}-?\d{4,12}\b",
        ],
    ),
    (
        COORDINATES,
        &[
            r"(?:[-+]|\b)(?:90\.0{3,}|[1-8]?\d\.\d{3,}),\s*[-+]?(?:180\.0{3,}|1[0-7]\d\.\d{3,}|[1-9]?\d\.\d{3,})\b",
        ],
    ),
    (
        VEHICLE_ID,
        &[
            // VIN: 17 characters, never I, O or Q
            r"\b(?-i:[A-HJ-NPR-Z0-9]{17})\b",
            r"\b(?:licen[cs]e\s+)?plate\s*(?:no\.?|num(?:ber)?|#)?\s*[:#]\s*[A-Z0-9]{1,4}[-\s]?[A-Z0-9]{1,4}\b",
        ],
    ),
];
