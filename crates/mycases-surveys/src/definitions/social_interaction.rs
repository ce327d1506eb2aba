use crate::SurveyDefinition;
use crate::questions::{Question, Section};

/// Social interaction survey.
pub struct SocialInteraction;

impl SurveyDefinition for SocialInteraction {
    fn id(&self) -> &str {
        "social_interaction"
    }

    fn title(&self) -> &str {
        "استبيان التفاعل الاجتماعي"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section {
                id: "social_interaction",
                title: "التفاعل الاجتماعي",
                questions: vec![
                    Question::choice(
                        "interaction_with_peers",
                        "التفاعل مع الأقران",
                        &["يبادر باللعب", "يشارك إذا طُلب منه", "يفضل اللعب منفرداً"],
                    ),
                    Question::choice(
                        "interaction_with_adults",
                        "التفاعل مع البالغين",
                        &["يتفاعل بسهولة", "خجول أو متردد", "يتجنب التفاعل"],
                    ),
                    Question::choice(
                        "eye_contact",
                        "التواصل البصري",
                        &["جيد ومستمر", "متقطع", "ضعيف أو نادر"],
                    ),
                    Question::text("social_interaction_notes", "ملاحظات إضافية"),
                ],
            }]
        });
        &SECTIONS
    }
}
