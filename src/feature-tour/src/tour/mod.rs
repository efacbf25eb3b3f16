mod error;


pub use error::{TourError, TourResult};

use crate::lessons::{
    ConditionalsLesson, ConstantsLesson, DeferralLesson, Environment, FunctionsLesson, Lesson,
    LoopsLesson, PackagesLesson, SwitchLesson, VariablesLesson,
};

/// Which lessons a run should include.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(Vec<String>),
}

impl Selection {
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Selection::All
        } else {
            Selection::Only(names)
        }
    }

    fn includes(&self, name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(names) => names.iter().any(|n| n == name),
        }
    }
}

/// An ordered collection of lessons.
pub struct Tour {
    lessons: Vec<Box<dyn Lesson>>,
}

impl Tour {
    pub fn new() -> Self {
        Self {
            lessons: Vec::new(),
        }
    }

    /// Every lesson, in the order the walkthrough presents them.
    pub fn standard() -> Self {
        Self {
            lessons: vec![
                Box::new(PackagesLesson),
                Box::new(FunctionsLesson),
                Box::new(VariablesLesson),
                Box::new(ConstantsLesson),
                Box::new(LoopsLesson),
                Box::new(ConditionalsLesson),
                Box::new(SwitchLesson),
                Box::new(DeferralLesson),
            ],
        }
    }

    pub fn register_lesson(&mut self, lesson: Box<dyn Lesson>) -> TourResult<()> {
        if self.get_lesson(lesson.name()).is_some() {
            return Err(TourError::DuplicateLesson(lesson.name().to_string()));
        }
        self.lessons.push(lesson);
        Ok(())
    }

    pub fn get_lesson(&self, name: &str) -> Option<&dyn Lesson> {
        self.lessons
            .iter()
            .find(|lesson| lesson.name() == name)
            .map(|lesson| &**lesson)
    }

    /// `(name, summary)` pairs in tour order.
    pub fn list_lessons(&self) -> Vec<(&str, &str)> {
        self.lessons
            .iter()
            .map(|lesson| (lesson.name(), lesson.summary()))
            .collect()
    }

    /// Runs the selected lessons in tour order and returns how many ran.
    ///
    /// Every requested name is checked before anything runs.
    pub fn run(&self, env: &Environment, selection: &Selection) -> TourResult<usize> {
        if let Selection::Only(names) = selection {
            if let Some(missing) = names.iter().find(|n| self.get_lesson(n).is_none()) {
                return Err(TourError::UnknownLesson(missing.clone()));
            }
        }

        let mut ran = 0;
        for lesson in self.lessons.iter().filter(|l| selection.includes(l.name())) {
            let span = tracing::info_span!("lesson", name = lesson.name());
            let _entered = span.enter();
            tracing::debug!("starting lesson");
            lesson.run(env);
            ran += 1;
        }

        tracing::info!(lessons = ran, "tour finished");
        Ok(ran)
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::standard()
    }
}
