use lingua_core::model::CategoryFilter;
use services::{PronunciationService, SpeechError, SpeechSupport};

/// User actions on the pronunciation trainer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashcardIntent {
    Category(CategoryFilter),
    Next,
    Previous,
    Speak,
}

/// Apply an intent to the trainer.
///
/// # Errors
///
/// Only `FlashcardIntent::Speak` can fail; see `PronunciationService::speak`.
pub fn apply_flashcard_intent(
    service: &mut PronunciationService,
    intent: FlashcardIntent,
) -> Result<(), SpeechError> {
    match intent {
        FlashcardIntent::Category(filter) => service.set_category(filter),
        FlashcardIntent::Next => service.next(),
        FlashcardIntent::Previous => service.previous(),
        FlashcardIntent::Speak => return service.speak_current(),
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryChipVm {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCardVm {
    pub native: &'static str,
    pub transcription: &'static str,
    pub translation: &'static str,
    pub category: &'static str,
    pub position_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub chips: Vec<CategoryChipVm>,
    pub card: Option<WordCardVm>,
    /// One entry per word in the active category; `true` marks the current one.
    pub dots: Vec<bool>,
    pub speech_enabled: bool,
    pub playing: bool,
    pub hint: &'static str,
}

#[must_use]
pub fn map_flashcards(service: &PronunciationService) -> FlashcardVm {
    let cards = service.cards();
    let active_filter = cards.filter();

    let chips = cards
        .vocabulary()
        .filters()
        .into_iter()
        .map(|filter| CategoryChipVm {
            filter,
            label: filter.label(),
            active: filter == active_filter,
        })
        .collect();

    let card = cards.current().map(|word| WordCardVm {
        native: word.native,
        transcription: word.transcription,
        translation: word.translation,
        category: word.category,
        position_label: format!("{} из {}", cards.index() + 1, cards.len()),
    });

    let dots = (0..cards.len()).map(|index| index == cards.index()).collect();

    let hint = match service.support() {
        SpeechSupport::Available => "Нажмите, чтобы услышать произношение",
        SpeechSupport::Unavailable => "Озвучка недоступна",
        SpeechSupport::Pending => "Проверяем поддержку озвучки…",
    };

    FlashcardVm {
        chips,
        card,
        dots,
        speech_enabled: service.speech_available(),
        playing: service.is_playing(),
        hint,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use lingua_core::content::pronunciation_words;
    use services::{SpeechEngine, SpeechEvent, SpeechRequest, UnavailableSpeech};

    use super::*;

    struct SilentSpeech;

    impl SpeechEngine for SilentSpeech {
        fn is_available(&self) -> bool {
            true
        }

        fn speak(&self, _request: &SpeechRequest) -> Result<(), SpeechError> {
            Ok(())
        }
    }

    #[test]
    fn first_card_is_shown_with_all_chip_active() {
        let service = PronunciationService::new(pronunciation_words().unwrap());
        let vm = map_flashcards(&service);
        assert_eq!(vm.chips[0].label, "Все");
        assert!(vm.chips[0].active);
        assert!(vm.chips[1..].iter().all(|chip| !chip.active));
        let card = vm.card.unwrap();
        assert_eq!(card.native, "Здравствуйте");
        assert_eq!(card.position_label, "1 из 15");
        assert_eq!(vm.dots.len(), 15);
        assert!(vm.dots[0]);
        assert!(!vm.speech_enabled);
        assert_eq!(vm.hint, "Проверяем поддержку озвучки…");
    }

    #[test]
    fn category_intent_narrows_the_cards() {
        let mut service = PronunciationService::new(pronunciation_words().unwrap());
        apply_flashcard_intent(&mut service, FlashcardIntent::Next).unwrap();
        apply_flashcard_intent(
            &mut service,
            FlashcardIntent::Category(CategoryFilter::Only("Вежливость")),
        )
        .unwrap();
        let vm = map_flashcards(&service);
        let active: Vec<_> = vm.chips.iter().filter(|chip| chip.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Вежливость");
        assert_eq!(vm.card.unwrap().position_label, "1 из 3");
        assert_eq!(vm.dots, vec![true, false, false]);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut service = PronunciationService::new(pronunciation_words().unwrap());
        apply_flashcard_intent(&mut service, FlashcardIntent::Previous).unwrap();
        let vm = map_flashcards(&service);
        assert_eq!(vm.card.unwrap().position_label, "15 из 15");
        assert_eq!(vm.dots.last(), Some(&true));
    }

    #[test]
    fn speech_state_drives_hint_and_indicator() {
        let mut service =
            PronunciationService::with_engine(pronunciation_words().unwrap(), Rc::new(SilentSpeech));
        apply_flashcard_intent(&mut service, FlashcardIntent::Speak).unwrap();
        service.handle_event(SpeechEvent::Started { request: 1 });
        let vm = map_flashcards(&service);
        assert!(vm.speech_enabled);
        assert!(vm.playing);
        assert_eq!(vm.hint, "Нажмите, чтобы услышать произношение");

        let unavailable = PronunciationService::with_engine(
            pronunciation_words().unwrap(),
            Rc::new(UnavailableSpeech),
        );
        let vm = map_flashcards(&unavailable);
        assert!(!vm.speech_enabled);
        assert_eq!(vm.hint, "Озвучка недоступна");
    }
}
