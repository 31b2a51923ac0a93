//! Fixed structure of the 150-day roadmap: which days belong to which
//! subject, how the plan splits into months, and the advice text the PDF
//! report picks by completion percentage.

pub struct Subject {
    pub name: &'static str,
    pub days: &'static [u32],
    pub topics: &'static str,
    pub color: (u8, u8, u8),
}

pub const SUBJECTS: &[Subject] = &[
    Subject {
        name: "Physics",
        days: &[
            1, 2, 3, 4, 5, 15, 16, 17, 18, 19, 31, 32, 33, 34, 39, 40, 41, 42, 47, 48, 51, 52,
            53, 54, 55,
        ],
        topics: "Electrostatics, Current, Magnetism, EM Induction, Waves, Optics",
        color: (59, 130, 246),
    },
    Subject {
        name: "Chemistry",
        days: &[
            6, 7, 8, 9, 20, 21, 22, 23, 24, 35, 36, 37, 38, 43, 44, 45, 46, 49, 50, 56, 57, 58,
            59,
        ],
        topics: "Solid State, Solutions, Electrochemistry, Kinetics, Surface Chemistry",
        color: (139, 92, 246),
    },
    Subject {
        name: "Biology",
        days: &[
            10, 11, 12, 13, 14, 25, 26, 27, 28, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72,
            73, 74, 75, 76, 77, 78, 79, 80, 81,
        ],
        topics: "Reproduction, Genetics, Evolution, Biotechnology, Ecology",
        color: (16, 185, 129),
    },
    Subject {
        name: "English",
        days: &[82, 83, 84, 85, 86, 87, 88, 89, 90],
        topics: "Prose, Poetry, Novel, Grammar, Writing Skills",
        color: (245, 158, 11),
    },
    Subject {
        name: "Hindi",
        days: &[91, 92, 93, 94, 95, 96, 97, 98, 99, 100],
        topics: "Gadya, Padya, Pratipurti, Vyakaran",
        color: (239, 68, 68),
    },
    Subject {
        name: "Revision & Tests",
        days: &[
            29, 30, 60, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
            115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131,
            132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148,
            149, 150,
        ],
        topics: "Full Revision, Mock Tests, PYQ Practice",
        color: (99, 102, 241),
    },
];

pub struct Month {
    pub name: &'static str,
    pub first_day: u32,
    pub last_day: u32,
    pub focus: &'static str,
    pub color: (u8, u8, u8),
}

pub const MONTHS: &[Month] = &[
    Month {
        name: "Month 1",
        first_day: 1,
        last_day: 30,
        focus: "Physics + Chemistry + Biology Basics",
        color: (59, 130, 246),
    },
    Month {
        name: "Month 2",
        first_day: 31,
        last_day: 60,
        focus: "Physics + Chemistry Main Chapters",
        color: (139, 92, 246),
    },
    Month {
        name: "Month 3",
        first_day: 61,
        last_day: 90,
        focus: "Biology + English",
        color: (16, 185, 129),
    },
    Month {
        name: "Month 4",
        first_day: 91,
        last_day: 120,
        focus: "Hindi + Full Revision PCB Start",
        color: (245, 158, 11),
    },
    Month {
        name: "Month 5",
        first_day: 121,
        last_day: 150,
        focus: "Final Revision + Tests + PYQ",
        color: (239, 68, 68),
    },
];

pub const STUDY_TIPS: &[&str] = &[
    "Make short notes for quick revision before exams",
    "Practice numerical problems daily for Physics and Chemistry",
    "Draw and label diagrams for Biology topics",
    "Time yourself while solving questions to improve speed",
    "Revise completed chapters at least once a week",
    "Get adequate sleep (7-8 hours) for better retention",
    "Solve previous year papers to understand exam patterns",
    "Join study groups for doubt clearing and motivation",
    "Take regular breaks during long study sessions",
    "Stay positive and maintain self-confidence",
];

/// Banner line and color for the overall-statistics page.
pub fn performance_summary(percentage: f64) -> (&'static str, (u8, u8, u8)) {
    if percentage < 20.0 {
        ("Just Started - Keep going!", (239, 68, 68))
    } else if percentage < 40.0 {
        ("Making Progress - Stay consistent!", (245, 158, 11))
    } else if percentage < 60.0 {
        ("Good Progress - Halfway there!", (59, 130, 246))
    } else if percentage < 80.0 {
        ("Excellent Work - Keep pushing!", (139, 92, 246))
    } else if percentage < 100.0 {
        ("Outstanding! Almost done!", (16, 185, 129))
    } else {
        ("COMPLETED! Congratulations!", (16, 185, 129))
    }
}

pub fn recommendations(percentage: f64) -> &'static [&'static str] {
    if percentage < 20.0 {
        &[
            "You are just getting started! Focus on building consistency.",
            "Try to complete at least 2-3 days per week to build momentum.",
            "Set a specific study time each day to develop a habit.",
            "Start with easier topics to build confidence.",
        ]
    } else if percentage < 50.0 {
        &[
            "Good progress! Keep maintaining your current pace.",
            "Make sure to review completed topics regularly.",
            "Start attempting practice questions for covered chapters.",
            "Create concise notes for quick revision.",
        ]
    } else if percentage < 80.0 {
        &[
            "Excellent progress! You are more than halfway there!",
            "Focus on revision for completed chapters.",
            "Start solving previous year questions (PYQs).",
            "Practice writing answers within time limits.",
            "Identify and strengthen weak areas.",
        ]
    } else if percentage < 100.0 {
        &[
            "Outstanding! You are in the final stretch!",
            "Complete full-length mock tests regularly.",
            "Focus on weak areas and quick revision.",
            "Work on speed and accuracy.",
            "Maintain your momentum till the end!",
        ]
    } else {
        &[
            "Congratulations! You have completed the entire roadmap!",
            "Focus on thorough revision of all topics.",
            "Practice with full-length mock tests.",
            "Polish your exam strategy and time management.",
            "Stay confident - you are fully prepared!",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TOTAL_DAYS;

    #[test]
    fn subject_days_partition_the_roadmap() {
        let mut all: Vec<u32> = SUBJECTS.iter().flat_map(|s| s.days.iter().copied()).collect();
        all.sort_unstable();
        let expected: Vec<u32> = (1..=TOTAL_DAYS).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn months_cover_the_roadmap_in_order() {
        let mut next = 1;
        for month in MONTHS {
            assert_eq!(month.first_day, next);
            assert_eq!(month.last_day - month.first_day + 1, 30);
            next = month.last_day + 1;
        }
        assert_eq!(next, TOTAL_DAYS + 1);
    }

    #[test]
    fn every_percentage_has_advice() {
        for pct in [0.0, 19.9, 20.0, 49.9, 50.0, 79.9, 80.0, 99.9, 100.0] {
            assert!(!recommendations(pct).is_empty());
            let (text, _) = performance_summary(pct);
            assert!(!text.is_empty());
        }
    }
}
