//! Arabic display labels and the canonical case field table.
//!
//! The `ar_key` stored next to every case value comes from [`CASE_FIELDS`],
//! so records written by different versions of the app carry the same
//! labels and legacy documents can be upgraded without guessing.

/// How a case field's value is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text or a selected option.
    Text,
    /// Non-negative integer counter (family size, sibling count, ...).
    Count,
}

/// One entry of the case schema: JSON key, Arabic label, storage kind.
#[derive(Debug, Clone, Copy)]
pub struct CaseField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn text(key: &'static str, label: &'static str) -> CaseField {
    CaseField {
        key,
        label,
        kind: FieldKind::Text,
    }
}

const fn count(key: &'static str, label: &'static str) -> CaseField {
    CaseField {
        key,
        label,
        kind: FieldKind::Count,
    }
}

/// Every labeled case field, in form order.
pub const CASE_FIELDS: &[CaseField] = &[
    text("child_name", "اسم الحالة"),
    text("dob", "تاريخ الميلاد"),
    text("age", "العمر"),
    text("gender", "الجنس"),
    text("first_language", "اللغة الأولى"),
    text("first_language_notes", "ملاحظات اللغة الأولى"),
    text("second_language", "اللغة الثانية"),
    text("second_language_notes", "ملاحظات اللغة الثانية"),
    text("diagnosis", "التشخيص"),
    text("diagnosed_by", "بواسطة"),
    text("father_name", "اسم الأب"),
    text("father_dob", "تاريخ ميلاد الأب"),
    text("father_age", "عمر الأب"),
    text("father_job", "وظيفة الأب"),
    text("father_health", "الحالة الصحية للأب"),
    text("mother_name", "اسم الأم"),
    text("mother_dob", "تاريخ ميلاد الأم"),
    text("mother_age", "عمر الأم"),
    text("mother_job", "وظيفة الأم"),
    text("mother_health", "الحالة الصحية للأم"),
    text("father_preg_age", "عمر الأب عند الولادة"),
    text("mother_preg_age", "عمر الأم عند الولادة"),
    text("parents_relation", "صلة قرابة بين الوالدين"),
    text("relation_degree", "درجة القرابة"),
    count("family_size", "حجم الأسرة"),
    count("siblings_count", "عدد الإخوة"),
    count("child_order", "ترتيب الحالة بين الأخوة"),
    text("similar_cases_family", "حالات مشابهة في العائلة"),
    text("similar_cases_who", "من"),
];

/// Look up a case field by its JSON key.
pub fn case_field(key: &str) -> Option<&'static CaseField> {
    CASE_FIELDS.iter().find(|f| f.key == key)
}

/// Label for a case field key, falling back to the key itself.
pub fn case_label(key: &str) -> &str {
    case_field(key).map(|f| f.label).unwrap_or(key)
}

pub const CASE_ID_LABEL: &str = "رقم الحالة";

pub const YES: &str = "نعم";
pub const NO: &str = "لا";

pub const MALE: &str = "ذكر";
pub const FEMALE: &str = "أنثى";

const GENDERS: &[&str] = &[MALE, FEMALE];
const YES_NO: &[&str] = &[YES, NO];

pub const LANGUAGES: &[&str] = &[
    "اللغة العربية - مصر",
    "اللغة العربية - دولة أخرى",
    "اللغة الإنجليزية",
    "اللغة الفرنسية",
    "اللغة الألمانية",
    "لغة أخرى",
    "لا يوجد",
];

pub const RELATION_DEGREES: &[&str] = &[
    "أبناء عم/خال من الدرجة الأولى",
    "أبناء عم/خال من الدرجة الثانية",
    "أقارب بعيدون",
];

/// Fixed choices offered by the intake form for a case field.
pub fn field_options(key: &str) -> Option<&'static [&'static str]> {
    match key {
        "gender" => Some(GENDERS),
        "first_language" | "second_language" => Some(LANGUAGES),
        "parents_relation" | "similar_cases_family" => Some(YES_NO),
        "relation_degree" => Some(RELATION_DEGREES),
        _ => None,
    }
}

pub const SURVEY_TYPE_LABEL: &str = "نوع الاستبيان";
pub const SURVEY_DATE_LABEL: &str = "تاريخ الاستبيان";
