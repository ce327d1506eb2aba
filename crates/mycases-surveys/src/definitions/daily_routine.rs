use crate::SurveyDefinition;
use crate::questions::{Question, Section};

/// Daily routine survey: sleep, eating, toileting.
pub struct DailyRoutine;

impl SurveyDefinition for DailyRoutine {
    fn id(&self) -> &str {
        "daily_routine"
    }

    fn title(&self) -> &str {
        "استبيان الروتين اليومي"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section {
                id: "daily_routine",
                title: "الروتين اليومي",
                questions: vec![
                    Question::choice(
                        "sleep_pattern",
                        "نمط النوم",
                        &["منتظم ومستقر", "متقطع", "صعوبة في النوم"],
                    ),
                    Question::choice(
                        "eating_habits",
                        "عادات الأكل",
                        &["يأكل بشكل مستقل", "يحتاج مساعدة بسيطة", "يحتاج مساعدة كاملة"],
                    ),
                    Question::choice(
                        "toilet_training",
                        "التدريب على الحمام",
                        &["مدرب بالكامل", "في مرحلة التدريب", "لم يبدأ التدريب"],
                    ),
                    Question::text("daily_routine_notes", "ملاحظات إضافية"),
                ],
            }]
        });
        &SECTIONS
    }
}
