use crate::SurveyDefinition;
use crate::questions::{Question, Section};

/// Gross and fine motor skills survey. Balance is free text.
pub struct MotorSkills;

impl SurveyDefinition for MotorSkills {
    fn id(&self) -> &str {
        "motor_skills"
    }

    fn title(&self) -> &str {
        "استبيان المهارات الحركية"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section {
                id: "motor_skills",
                title: "المهارات الحركية",
                questions: vec![
                    Question::choice(
                        "gross_motor_skills",
                        "المهارات الحركية الكبرى (الجري، القفز)",
                        &["طبيعية ومتناسقة", "يوجد بعض الصعوبات", "صعوبات واضحة"],
                    ),
                    Question::choice(
                        "fine_motor_skills",
                        "المهارات الحركية الدقيقة (مسك القلم، الأزرار)",
                        &["يتحكم بها جيدًا", "يجد بعض الصعوبة", "صعوبة واضحة"],
                    ),
                    Question::text("balance", "التوازن"),
                    Question::text("motor_notes", "ملاحظات إضافية"),
                ],
            }]
        });
        &SECTIONS
    }
}
