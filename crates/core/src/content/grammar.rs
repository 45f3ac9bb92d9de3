use crate::model::{Question, QuestionBank, QuestionError, QuestionId};

static GRAMMAR_QUESTIONS: [Question; 5] = [
    Question::new(
        QuestionId::new(1),
        "Выберите правильный падеж: \"Я иду в ___\" (магазин)",
        &["магазин", "магазина", "магазину", "магазином"],
        0,
        "Винительный падеж для направления движения: в + винительный падеж",
    ),
    Question::new(
        QuestionId::new(2),
        "Какое окончание у глагола \"читать\" в 1-м лице ед. числа?",
        &["читаешь", "читаю", "читает", "читаем"],
        1,
        "Глагол I спряжения: я читаю",
    ),
    Question::new(
        QuestionId::new(3),
        "Выберите правильную форму: \"У меня есть ___\" (книга)",
        &["книгу", "книге", "книга", "книги"],
        2,
        "Именительный падеж после \"есть\": у меня есть книга",
    ),
    Question::new(
        QuestionId::new(4),
        "Какое местоимение правильное: \"___ читаешь книгу\"",
        &["Я", "Ты", "Он", "Мы"],
        1,
        "Форма глагола \"читаешь\" соответствует местоимению \"ты\"",
    ),
    Question::new(
        QuestionId::new(5),
        "Выберите множественное число: \"стол\"",
        &["столы", "столи", "столов", "столе"],
        0,
        "Множественное число существительного мужского рода: столы",
    ),
];

/// The grammar quiz shown in the exercises section.
///
/// # Errors
///
/// Returns `QuestionError` if the built-in table is malformed.
pub fn grammar_quiz() -> Result<QuestionBank, QuestionError> {
    QuestionBank::new(&GRAMMAR_QUESTIONS)
}
