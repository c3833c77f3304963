//! Text-console front end.
//!
//! [`run_quiz_console`] drives a [`QuizPresenter`] through one session,
//! reading answers from any `BufRead` and writing to any `Write`, so the same
//! loop serves a terminal and the tests.

use std::io::{self, BufRead, Write};

use log::debug;
use rand::Rng;

use crate::quiz_engine::{models::AnswerCheck, presenter::QuizPresenter, render::AssetRenderer};

/// Print `prompt` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn declined(reply: &str) -> bool {
    reply.eq_ignore_ascii_case("n")
}

/// Run one quiz session on the console.
///
/// Returns `true` if the user asked to play again.
pub fn run_quiz_console<Rn, A, R, W>(
    presenter: &mut QuizPresenter<'_, Rn>,
    renderer: &A,
    mut input: R,
    mut output: W,
) -> io::Result<bool>
where
    Rn: Rng,
    A: AssetRenderer + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the quiz! You'll be asked {} questions.", presenter.nb_questions_remaining())?;
    writeln!(output)?;

    while presenter.nb_questions_remaining() > 0 {
        match prompt(&mut input, &mut output, "Continue? [Y/n] ")? {
            Some(reply) if !declined(&reply) => {}
            _ => break,
        }
        writeln!(output)?;

        presenter.cue_next_question();
        writeln!(output, "Q{}: {}", presenter.current_question_number(), presenter.question_statement())?;
        writeln!(output)?;

        for asset in presenter.question_assets() {
            writeln!(output, "{}", renderer.render(asset))?;
            writeln!(output)?;
        }

        let labels: Vec<String> = presenter.current_user_choices().keys().map(|k| k.to_string()).collect();
        for (label, option) in presenter.current_user_choices() {
            writeln!(output, "{label}. {option}")?;
        }
        writeln!(output)?;

        let mut reply = prompt(&mut input, &mut output, &format!("Your answer ({}): ", labels.join(", ")))?;
        let result = loop {
            let Some(key) = reply else {
                debug!("input closed mid-question, abandoning session");
                return Ok(false);
            };
            match presenter.is_correct(&key) {
                AnswerCheck::InvalidKey => {
                    writeln!(output, "Please input one of the following options: {}.", labels.join(", "))?;
                    reply = prompt(&mut input, &mut output, "Your answer: ")?;
                }
                check => break check == AnswerCheck::Correct,
            }
        };

        writeln!(output, "{}", presenter.result_feedback(result))?;
        presenter.post_question_update(result);

        if presenter.nb_questions_remaining() > 0 {
            writeln!(output, "Your current score is: {}.", presenter.scoreline_report())?;
            writeln!(output)?;
        }
    }

    writeln!(output)?;
    writeln!(output, "Quiz over!")?;
    writeln!(output, "Overall, you scored {}.", presenter.scoreline_report())?;
    writeln!(output)?;

    let again = prompt(&mut input, &mut output, "Would you like to play again? [Y/n] ")?;
    Ok(matches!(again, Some(reply) if !declined(&reply)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{brain::QuizBrain, models::Question, render::RawAsset};
    use rand::{rngs::StdRng, SeedableRng};

    const FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

    fn doublet() -> Vec<Question> {
        let q = Question::new("Dummy Q", "A", vec!["B".into(), "C".into(), "D".into()], vec![FEN.into()]);
        vec![q.clone(), q]
    }

    fn run<'a>(bank: &'a [Question], script: &str) -> (bool, String, QuizPresenter<'a>) {
        let quiz = QuizBrain::new(bank, bank.len(), StdRng::seed_from_u64(6)).unwrap();
        let mut presenter = QuizPresenter::new(quiz);
        let mut out = Vec::new();
        let again = run_quiz_console(&mut presenter, &RawAsset, script.as_bytes(), &mut out).unwrap();
        (again, String::from_utf8(out).unwrap(), presenter)
    }

    #[test]
    fn full_session_with_one_invalid_key() {
        let bank = doublet();
        let (again, out, presenter) = run(&bank, "\n?\nA\ny\nb\nn\nhello\n");

        assert!(!again);
        assert_eq!(presenter.nb_questions_answered(), 2);
        assert_eq!(out.matches("Please input one of the following options: A, B, C, D.").count(), 1);
        assert!(out.contains("Welcome to the quiz! You'll be asked 2 questions."));
        assert!(out.contains("Q1: Dummy Q"));
        assert!(out.contains("Q2: Dummy Q"));
        assert!(out.contains(FEN));
        assert!(out.contains("Your current score is: "));
        assert!(out.contains("Quiz over!"));
        assert!(out.contains(&format!("Overall, you scored {}/2.", presenter.user_score())));
    }

    #[test]
    fn declining_to_continue_ends_the_session_early() {
        let bank = doublet();
        let (again, out, presenter) = run(&bank, "n\ny\n");
        assert!(again);
        assert_eq!(presenter.nb_questions_answered(), 0);
        assert!(out.contains("Overall, you scored 0/0."));
    }

    #[test]
    fn correct_answer_is_credited() {
        let bank = vec![Question::new("2 + 2?", "4", vec!["5".into()], vec![])];
        // Same seed as the preview, so both see the same option order.
        let quiz = QuizBrain::new(&bank, 1, StdRng::seed_from_u64(1)).unwrap();
        let mut presenter = QuizPresenter::new(quiz);
        let mut preview = QuizPresenter::new(QuizBrain::new(&bank, 1, StdRng::seed_from_u64(1)).unwrap());
        preview.cue_next_question();
        let right_key = preview
            .current_user_choices()
            .iter()
            .find(|(_, v)| v.as_str() == "4")
            .map(|(k, _)| *k)
            .unwrap();

        let script = format!("y\n{}\nn\n", right_key.to_ascii_lowercase());
        let mut out = Vec::new();
        let again = run_quiz_console(&mut presenter, &RawAsset, script.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(!again);
        assert!(out.contains("Correct!"));
        assert!(out.contains("Overall, you scored 1/1."));
    }

    #[test]
    fn end_of_input_abandons_without_replay() {
        let bank = doublet();
        let (again, _, presenter) = run(&bank, "y\n");
        assert!(!again);
        assert_eq!(presenter.nb_questions_answered(), 0);
    }
}
