use crate::SurveyDefinition;
use crate::questions::{Question, Section, YES_NO};

/// First assessment: the long intake interview covering schooling,
/// development, senses, speech, prior testing and therapy, preferences,
/// family situation, and pregnancy and birth.
pub struct FirstAssessment;

impl SurveyDefinition for FirstAssessment {
    fn id(&self) -> &str {
        "first_assessment"
    }

    fn title(&self) -> &str {
        "استبيان التقييم الأول"
    }

    fn includes_case_context(&self) -> bool {
        true
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section {
                    id: "schooling",
                    title: "الدراسة والرعاية",
                    questions: vec![
                        Question::choice(
                            "school_attendance",
                            "هل يذهب الى (المدرسة \\ الحضانة)",
                            YES_NO,
                        ),
                        Question::text("school_year", "العام الدراسى"),
                        Question::text("school_duration", "المدى التى قضاها"),
                        Question::text("school_type", "نوعها"),
                        Question::text("school_discontinue", "سبب عدم الاستمرار"),
                        Question::choice(
                            "care_center",
                            "هل يذهب الى (مركز \\ اكاديمية رعاية)",
                            YES_NO,
                        ),
                        Question::text("care_duration", "المدى التى قضاها"),
                        Question::text("care_type", "نوعها"),
                        Question::text("care_discontinue", "سبب عدم الاستمرار"),
                        Question::choice(
                            "academic_issues",
                            "هل يوجد مشاكل فى التحصيل الدراسى",
                            YES_NO,
                        ),
                        Question::text("academic_issues_type", "نوعها"),
                    ],
                },
                Section {
                    id: "development",
                    title: "النمو",
                    questions: vec![
                        Question::text(
                            "abnormal_dev",
                            "هل كانت هناك اشارات تدل على نمو غير طبيعى",
                        ),
                        Question::text("abnormal_dev_what", "ما هى"),
                        Question::text("diagnosis_what", "ما هو تشخيصه"),
                        Question::text("breastfeeding_duration", "مدة الرضاعة"),
                        Question::choice(
                            "breastfeeding_type",
                            "نوع الرضاعة",
                            &["طبيعى", "صناعى"],
                        ),
                        Question::choice("weaning", "الفطام", &["تدريجى", "مفاجئ"]),
                        Question::text("weaning_age", "سن الفطام"),
                        Question::text("breastfeeding_problems", "هل وجد مشاكل بالرضاعة"),
                        Question::text("teething", "التسنين"),
                        Question::text("crawling", "الحبو"),
                        Question::text("sitting", "الجلوس"),
                        Question::text("standing", "الوقوف"),
                        Question::text("walking_start", "بدا المشى"),
                        Question::text("walking", "المشى"),
                        Question::text("diaper_free", "متى تخلص من الحفاظ"),
                        Question::choice(
                            "bathroom_request",
                            "استخدام الحمام الان",
                            &["يطلب لفظيا", "بالاشارة", "يحتاج تدريب"],
                        ),
                        Question::choice(
                            "bathroom_independence",
                            "يدخل الحمام",
                            &["وحدة", "مساعدة جزئية", "مساعدة كلية"],
                        ),
                    ],
                },
                Section {
                    id: "senses",
                    title: "الإبصار والسمع",
                    questions: vec![
                        Question::choice(
                            "vision_issues",
                            "هل يعانى من اي ضعف فى درجة الابصار",
                            YES_NO,
                        ),
                        Question::text("vision_type", "نوعه"),
                        Question::text("vision_severity", "شدته"),
                        Question::choice("hearing_issues", "هل يعانى من ضعف سمع", YES_NO),
                        Question::choice(
                            "hearing_type",
                            "نوعه",
                            &["توصيلى", "حسى عصبى", "مركزى", "مختلط"],
                        ),
                        Question::text("hearing_severity", "شدته"),
                        Question::choice("hearing_aid", "هل يلبس سماعات", YES_NO),
                        Question::text("hearing_aid_type", "نوعها"),
                        Question::choice("cochlear_implant", "هل يلبس قوقعة", YES_NO),
                        Question::text("cochlear_since", "من امتى"),
                    ],
                },
                Section {
                    id: "speech",
                    title: "الكلام والحالة الجسدية",
                    questions: vec![
                        Question::choice(
                            "speech_tone",
                            "هل يتحدث الطفل بنبرة صوت ثابتة معينة",
                            YES_NO,
                        ),
                        Question::choice(
                            "speech_volume",
                            "هل يتحدث الطفل بصوت",
                            &["مرتفع", "منخفض"],
                        ),
                        Question::choice("drooling", "هل يعانى الطفل من سيلان اللعاب", YES_NO),
                        Question::choice("swallowing", "يعانى الطفل من صعوبة بلع", YES_NO),
                        Question::choice(
                            "breathing",
                            "هل يعانى الطفل من اضطرابات التنفس",
                            YES_NO,
                        ),
                        Question::choice(
                            "breathing_type",
                            "نوع اضطراب التنفس",
                            &["شهيق", "زفير", "نفخ", "شفط"],
                        ),
                    ],
                },
                Section {
                    id: "tests",
                    title: "الاختبارات والتقييمات",
                    questions: vec![
                        Question::choice("iq_test", "اختبار ذكاء IQ", YES_NO),
                        Question::text("iq_score", "الدرجة"),
                        Question::choice("hearing_test", "مقياس السمع", YES_NO),
                        Question::text("hearing_score", "الدرجة"),
                        Question::choice("ear_pressure", "ضغط الاذن", YES_NO),
                        Question::choice("language_test", "اختبار اللغة", YES_NO),
                        Question::choice("speech_test", "اختبار نطق", YES_NO),
                    ],
                },
                Section {
                    id: "rehabilitation",
                    title: "التأهيل",
                    questions: vec![
                        Question::text("case_acceptance", "مدى تقبل الحالة للتاهيل"),
                        Question::text("family_acceptance", "مدى تقبل الاسرة للمشكلة"),
                        Question::choice("speech_therapy", "تخاطب", YES_NO),
                        Question::text("speech_therapy_progress", "مدى التقدم"),
                        Question::choice("physical_therapy", "علاج طبيعى", YES_NO),
                        Question::text("physical_therapy_progress", "مدى التقدم"),
                        Question::choice("computer_therapy", "التعامل مع الكمبيوتر", YES_NO),
                        Question::text("computer_therapy_progress", "مدى التقدم"),
                        Question::choice("skills_therapy", "تنمية المهارات", YES_NO),
                        Question::text("skills_therapy_progress", "مدى التقدم"),
                    ],
                },
                Section {
                    id: "preferences",
                    title: "التفضيلات",
                    questions: vec![
                        Question::text(
                            "favorite_food",
                            "ما اكثر الماكولات او المشروبات التى يفضلها",
                        ),
                        Question::text("favorite_games", "ما اكثر الالعاب التى يحبها"),
                        Question::text("other_likes", "اشياء اخرى يحبها"),
                        Question::text("dislikes", "اشياء ينزعج منها"),
                    ],
                },
                Section {
                    id: "family",
                    title: "الوضع الأسري",
                    questions: vec![
                        Question::text("living_with", "مع من يعيش الطفل"),
                        Question::text(
                            "attached_people",
                            "هل يوجد اشخاص مرتبط بيهم الحالة (من الاسرة أو في المحيط) ويؤثرون فيه",
                        ),
                        Question::text("caregiver", "من هو القائم برعاية الطفل"),
                        Question::text("economic_status", "الوضع الاقتصادى"),
                        Question::text("cultural_status", "الوضع الثقافى"),
                        Question::text("social_status", "الوضع الاجتماعى"),
                        Question::text("family_relationship", "طبيعة العلاقة الاسرية"),
                        Question::text(
                            "family_acceptance_rehab",
                            "مدى تقبل الاسرة للاضطراب واستعدادها للمشاركة فى التأهيل",
                        ),
                    ],
                },
                Section {
                    id: "pregnancy_birth",
                    title: "الحمل والولادة",
                    questions: vec![
                        Question::choice(
                            "mother_health_pregnancy",
                            "صحة الام اثناء الحمل كانت",
                            &["مستقرة", "غير مستقرة"],
                        ),
                        Question::choice("birth_type", "نوع الولادة", &["طبيعى", "قيصرى"]),
                        Question::text("birth_weight", "وزن الطفل عند الولادة"),
                        Question::choice("birth_cry", "هل صرخ الطفل صرخة الميلاد", YES_NO),
                        Question::choice(
                            "head_size",
                            "حجم راس الطفل عند الولادة",
                            &["طبيعى", "غير طبيعى"],
                        ),
                        Question::text("head_size_value", "كان"),
                        Question::choice(
                            "birth_defects",
                            "هل كان هناك عيوب خلقية بعد الولادة",
                            YES_NO,
                        ),
                        Question::text("birth_defects_what", "ما هى"),
                    ],
                },
            ]
        });
        &SECTIONS
    }
}
