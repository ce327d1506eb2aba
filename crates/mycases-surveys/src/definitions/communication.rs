use crate::SurveyDefinition;
use crate::questions::{Question, Section};

/// Communication and language survey.
pub struct Communication;

impl SurveyDefinition for Communication {
    fn id(&self) -> &str {
        "communication"
    }

    fn title(&self) -> &str {
        "استبيان التواصل واللغة"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section {
                id: "communication",
                title: "التواصل واللغة",
                questions: vec![
                    Question::choice(
                        "verbal_communication",
                        "التواصل اللفظي",
                        &["يستخدم جمل كاملة", "يستخدم كلمات مفردة", "يستخدم أصوات أو إيماءات"],
                    ),
                    Question::choice(
                        "non_verbal_communication",
                        "التواصل غير اللفظي (الإشارة، تعابير الوجه)",
                        &["يستخدمه بفعالية", "يستخدمه بشكل محدود", "نادراً ما يستخدمه"],
                    ),
                    Question::choice(
                        "instructions_understanding",
                        "فهم التعليمات",
                        &["يفهم التعليمات المعقدة", "يفهم التعليمات البسيطة", "يجد صعوبة في الفهم"],
                    ),
                    Question::text("communication_notes", "ملاحظات إضافية"),
                ],
            }]
        });
        &SECTIONS
    }
}
