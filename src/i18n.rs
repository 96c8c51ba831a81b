//! Display Language Tables
//!
//! Compiled-in label tables for English and Hebrew.

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    He,
}

/// Languages offered in the selector, with their native names
pub const LANGUAGES: &[(Lang, &str)] = &[(Lang::En, "English"), (Lang::He, "עברית")];

impl Lang {
    /// Look up a language by code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "he" | "iw" => Lang::He,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::He => "he",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::He => "rtl",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::He => &HE,
        }
    }
}

/// Every user-visible label
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub new_task: &'static str,
    pub steps: &'static str,
    pub complete: &'static str,
    pub completed: &'static str,
    pub analytics: &'static str,
    pub success_rate: &'static str,
    pub tasks: &'static str,
    pub live: &'static str,
    pub no_tasks: &'static str,
    pub task_title: &'static str,
    pub steps_hint: &'static str,
    pub dog: &'static str,
    pub exercise: &'static str,
    pub scheduled_for: &'static str,
    pub none: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub saved: &'static str,
    pub load_error: &'static str,
    pub action_error: &'static str,
    pub dismiss: &'static str,
    pub connect: &'static str,
    pub connected: &'static str,
    pub send_test: &'static str,
}

static EN: Strings = Strings {
    title: "AI Dog Training",
    subtitle: "Personalized tasks, real‑time feedback, visible progress",
    new_task: "New Task",
    steps: "Steps",
    complete: "Complete",
    completed: "Completed",
    analytics: "Analytics",
    success_rate: "Success rate",
    tasks: "Tasks",
    live: "Live Coach",
    no_tasks: "No tasks yet. Use the button above to create your first task.",
    task_title: "Title",
    steps_hint: "One step per line",
    dog: "Dog",
    exercise: "Exercise",
    scheduled_for: "Scheduled for",
    none: "None",
    save: "Save",
    cancel: "Cancel",
    saved: "Task saved",
    load_error: "Could not load data. Please try again.",
    action_error: "Something went wrong. Please try again.",
    dismiss: "Dismiss",
    connect: "Connect",
    connected: "Connected",
    send_test: "Send test",
};

static HE: Strings = Strings {
    title: "אימון כלבים עם AI",
    subtitle: "משימות מותאמות אישית, משוב בזמן אמת, התקדמות נראית",
    new_task: "משימה חדשה",
    steps: "צעדים",
    complete: "סיום",
    completed: "הושלמו",
    analytics: "אנליטיקה",
    success_rate: "שיעור הצלחה",
    tasks: "משימות",
    live: "מאמן חי",
    no_tasks: "אין משימות עדיין. השתמשו בכפתור למעלה כדי ליצור את המשימה הראשונה.",
    task_title: "כותרת",
    steps_hint: "צעד אחד בכל שורה",
    dog: "כלב",
    exercise: "תרגיל",
    scheduled_for: "מתוזמן ל",
    none: "ללא",
    save: "שמירה",
    cancel: "ביטול",
    saved: "המשימה נשמרה",
    load_error: "לא ניתן לטעון נתונים. נסו שוב.",
    action_error: "משהו השתבש. נסו שוב.",
    dismiss: "סגירה",
    connect: "התחברות",
    connected: "מחובר",
    send_test: "שליחת בדיקה",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Lang::from_code("fr"), Lang::En);
        assert_eq!(Lang::from_code(""), Lang::En);
        assert_eq!(Lang::from_code(" HE "), Lang::He);
    }

    #[test]
    fn test_code_round_trips_through_selector() {
        for (lang, _) in LANGUAGES {
            assert_eq!(Lang::from_code(lang.code()), *lang);
        }
    }

    #[test]
    fn test_tables_differ_per_language() {
        let en = Lang::En.strings();
        let he = Lang::He.strings();
        assert_eq!(en.tasks, "Tasks");
        assert_eq!(he.tasks, "משימות");
        assert_ne!(en.complete, he.complete);
        assert_eq!(Lang::He.dir(), "rtl");
    }
}
