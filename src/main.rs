use std::io::{self, Write};

use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use newsquiz_client::{
    Category, Config, DEFAULT_QUESTION_COUNT, QuizApiClient, QuizStore, config::LoggingConfig,
    log_system_event,
};

const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    // Initialize logging with file output; the guard must outlive main
    let _guard = setup_logging(&config.logging)?;

    log_system_event!(startup, component = "client", "news quiz client starting");
    info!(base_url = %config.service.base_url, "Using quiz service");

    let client = QuizApiClient::new(&config.service.base_url);
    let mut store = QuizStore::new();

    loop {
        if !choose_quiz(&client, &mut store).await? {
            break;
        }
        let finished = play_quiz(&mut store)?;
        if finished && !show_results(&mut store)? {
            break;
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Home page: fetch categories, let the user pick one or more plus a
/// difficulty, then generate the quiz. Returns false when the user quits.
async fn choose_quiz(client: &QuizApiClient, store: &mut QuizStore) -> Result<bool> {
    store.set_loading(true, "Loading categories...");
    let categories = match client.get_categories().await {
        Ok(categories) => {
            store.set_loading(false, "");
            categories
        }
        Err(err) => {
            store.set_loading(false, "");
            store.set_error(Some(err));
            show_error(store, "Failed to load categories. Please try again.");
            return Ok(confirm("Try again?")?);
        }
    };

    if categories.is_empty() {
        println!("No categories available right now.");
        return Ok(false);
    }

    println!("\nTest your knowledge");
    println!("Pick a topic and difficulty to begin.\n");
    for (index, category) in categories.iter().enumerate() {
        println!("  [{}] {}", index + 1, category.name);
    }

    let selected = loop {
        let input = prompt("\nCategories (comma-separated numbers, or q to quit):")?;
        if input.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        match parse_category_selection(&input, &categories) {
            Some(ids) => break ids,
            None => println!("Please enter valid category numbers, e.g. 1,3"),
        }
    };

    let difficulty = loop {
        let input = prompt(&format!("Difficulty {DIFFICULTIES:?}:"))?;
        if let Some(difficulty) = DIFFICULTIES
            .iter()
            .find(|d| d.eq_ignore_ascii_case(input.trim()))
        {
            break difficulty.to_string();
        }
        println!("Please choose one of {DIFFICULTIES:?}");
    };

    store.set_loading(true, "Generating your quiz...");
    store.clear_error();
    println!("{}", store.loading_message());

    match client
        .generate_quiz(&selected, &difficulty, DEFAULT_QUESTION_COUNT)
        .await
    {
        Ok(session) => {
            store.set_current_session(Some(session));
            store.set_loading(false, "");
            Ok(true)
        }
        Err(err) => {
            store.set_loading(false, "");
            store.set_error(Some(err));
            show_error(store, "Failed to generate quiz. Please try again.");
            Ok(confirm("Try again?")?)
        }
    }
}

/// Quiz page: walk the questions with answer/next/previous until the last
/// answer is submitted. Returns false if the user abandons the attempt.
fn play_quiz(store: &mut QuizStore) -> Result<bool> {
    loop {
        let Some(session) = store.current_session() else {
            return Ok(false);
        };
        // The service may hand back a quiz with no questions; there is
        // nothing to ask, so score it straight away.
        if session.questions.is_empty() {
            return Ok(store.compute_result().is_some());
        }
        let index = session.current_question_index;
        let total = session.questions.len();
        let question = session.questions[index].clone();
        let answer = session.answers[index];
        let is_last = index + 1 == total;

        println!("\nQuestion {} of {}", index + 1, total);
        println!("{}\n", question.text);
        for (i, option) in question.options.iter().enumerate() {
            let marker = if answer == Some(i) { ">" } else { " " };
            println!(" {marker} [{}] {}", i + 1, option);
        }

        let next_label = if is_last { "submit" } else { "next" };
        let input = prompt(&format!(
            "\nAnswer number, (n){next_label}, (p)revious, (q)uit:"
        ))?;

        match input.to_lowercase().as_str() {
            "q" => {
                store.clear_session();
                return Ok(false);
            }
            "p" => store.previous_question(),
            "n" => {
                if answer.is_none() {
                    println!("Answer the question before moving on.");
                } else if is_last {
                    store.set_loading(true, "Calculating your score...");
                    store.clear_error();
                    let computed = store.compute_result().is_some();
                    store.set_loading(false, "");
                    if computed {
                        return Ok(true);
                    }
                    store.set_error(Some(newsquiz_client::ApiError::Message(
                        "Unable to compute result.".to_string(),
                    )));
                    show_error(store, "Unable to compute result.");
                    return Ok(false);
                } else {
                    store.next_question();
                }
            }
            other => match other.parse::<usize>() {
                Ok(choice) if (1..=question.options.len()).contains(&choice) => {
                    store.record_answer(index, choice - 1);
                }
                _ => println!("Please pick an option between 1 and {}.", question.options.len()),
            },
        }
    }
}

/// Results page: print the score summary and per-question breakdown.
/// Returns true when the user wants to retake a quiz.
fn show_results(store: &mut QuizStore) -> Result<bool> {
    let Some(result) = store.last_result().cloned() else {
        println!("No results found. Please take a quiz first.");
        store.clear_session();
        return Ok(true);
    };

    println!("\nResults");
    println!(
        "Score: {}/{} ({:.0}%) on {} difficulty",
        result.score, result.total_questions, result.percentage, result.difficulty
    );

    for (index, question) in result.questions.iter().enumerate() {
        let verdict = if question.is_correct { "correct" } else { "incorrect" };
        println!("\n{}. {} [{verdict}]", index + 1, question.text);
        match question.user_answer {
            Some(i) => println!("   Your answer:    {}", question.options[i]),
            None => println!("   Your answer:    (unanswered)"),
        }
        if !question.is_correct {
            println!(
                "   Correct answer: {}",
                question.options[question.correct_answer]
            );
        }
        if !question.explanation.is_empty() {
            println!("   {}", question.explanation);
        }
    }

    let retake = confirm("\nRetake quiz?")?;
    store.clear_session();
    Ok(retake)
}

fn show_error(store: &QuizStore, fallback: &str) {
    match store.error() {
        Some(err) => match err.code() {
            Some(code) => println!("Error ({code}): {}", err.message()),
            None => println!("Error: {}", err.message()),
        },
        None => println!("Error: {fallback}"),
    }
}

fn parse_category_selection(input: &str, categories: &[Category]) -> Option<Vec<i64>> {
    let picks: Option<Vec<i64>> = input
        .split(',')
        .map(|part| {
            let number = part.trim().parse::<usize>().ok()?;
            categories.get(number.checked_sub(1)?).map(|c| c.id)
        })
        .collect();
    picks.filter(|ids| !ids.is_empty())
}

fn confirm(message: &str) -> Result<bool> {
    let input = prompt(&format!("{message} [y/N]"))?;
    Ok(input.eq_ignore_ascii_case("y"))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message} ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::fmt;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let console_layer = config.console_enabled.then(|| {
        fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(io::stderr)
    });

    let (file_layer, guard) = if config.file_enabled {
        std::fs::create_dir_all(&config.log_directory).unwrap_or_else(|e| {
            eprintln!("Warning: Could not create logs directory: {}", e);
        });

        let file_appender =
            tracing_appender::rolling::daily(&config.log_directory, "newsquiz-client.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(non_blocking_file);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
