mod config;
mod quiz;

use std::sync::Arc;

use config::Config;
use dotenv::dotenv;
use log::{debug, warn};
use quiz::{
    session::{QuizSession, SessionError, Step},
    zones::{self, ZoneRecord},
    AnswerTag, QUESTIONS,
};
use teloxide::{
    dispatching::dialogue::{serializer::Json, ErasedStorage, SqliteStorage, Storage},
    prelude::*,
    types::{ChatId, InputFile, KeyboardButton, KeyboardMarkup, KeyboardRemove, ParseMode},
};

type HardinessDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    ChooseMode,
    Quiz {
        session: QuizSession,
    },
    Basic {
        session: QuizSession,
    },
    Result {
        zone: AnswerTag,
    },
}

type UserInfoStorage = std::sync::Arc<ErasedStorage<State>>;

#[tokio::main]
async fn main() {
    let env_file = dotenv();
    pretty_env_logger::init();
    if let Err(err) = env_file {
        warn!("No .env file loaded: {}", err);
    }
    log::info!("Starting hardiness quiz bot...");

    let config = Arc::new(Config::from_env());
    let bot = Bot::from_env();

    debug!("Opening dialogue storage at {}", config.db_path);
    let storage: UserInfoStorage = match SqliteStorage::open(&config.db_path, Json).await {
        Ok(storage) => storage.erase(),
        Err(err) => {
            log::error!("Failed to open dialogue storage {}: {}", config.db_path, err);
            return;
        }
    };
    log::info!("Dialogue storage ready");

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, ErasedStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ChooseMode].endpoint(receive_mode_choice))
            .branch(dptree::case![State::Quiz { session }].endpoint(quiz_answer))
            .branch(dptree::case![State::Basic { session }].endpoint(basic_input))
            .branch(dptree::case![State::Result { zone }].endpoint(result_action)),
    )
    .dependencies(dptree::deps![storage, config])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const GREETING_TEXT: &str = "🌿 Human Hardiness Quiz\n\nFind out which hardiness zone you were made for. Take the quiz, or enter your ideal conditions directly.";
const QUIZ_MODE: &str = "Quiz Mode";
const BASIC_MODE: &str = "Basic Mode";
const SHARE_ZONE: &str = "📤 Share Your Zone";
const SAVE_CARD: &str = "💾 Save Card";
const SKIP_FIELD: &str = "Skip";

fn mode_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(QUIZ_MODE),
        KeyboardButton::new(BASIC_MODE),
    ]])
}

fn result_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(SHARE_ZONE), KeyboardButton::new(SAVE_CARD)],
        vec![KeyboardButton::new(QUIZ_MODE), KeyboardButton::new(BASIC_MODE)],
    ])
}

async fn start(bot: Bot, dialogue: HardinessDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT)
        .reply_markup(mode_keyboard())
        .await?;

    dialogue.update(State::ChooseMode).await?;
    Ok(())
}

async fn receive_mode_choice(
    bot: Bot,
    dialogue: HardinessDialogue,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    if switch_mode(&bot, &dialogue, &config, &msg).await? {
        return Ok(());
    }
    bot.send_message(msg.chat.id, "Please choose one of the modes")
        .reply_markup(mode_keyboard())
        .await?;
    Ok(())
}

/// Starts a fresh session if the message is one of the mode buttons.
async fn switch_mode(
    bot: &Bot,
    dialogue: &HardinessDialogue,
    config: &Config,
    msg: &Message,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    let session = match msg.text() {
        Some(QUIZ_MODE) => QuizSession::quiz(),
        Some(BASIC_MODE) => {
            bot.send_message(msg.chat.id, "Enter Your Ideal Conditions")
                .reply_markup(KeyboardRemove::new())
                .await?;
            QuizSession::basic()
        }
        _ => return Ok(false),
    };
    advance(bot, dialogue, config, msg.chat.id, session).await?;
    Ok(true)
}

async fn quiz_answer(
    bot: Bot,
    dialogue: HardinessDialogue,
    mut session: QuizSession,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    if switch_mode(&bot, &dialogue, &config, &msg).await? {
        return Ok(());
    }
    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, "Please pick one of the answers")
            .await?;
        return Ok(());
    };

    match session.answer_by_label(text) {
        Ok(_) => advance(&bot, &dialogue, &config, msg.chat.id, session).await,
        Err(SessionError::UnknownOption(_)) => {
            bot.send_message(msg.chat.id, "Please pick one of the answers")
                .await?;
            send_step(&bot, &config, msg.chat.id, session.prompt()?).await
        }
        Err(SessionError::NoSuchQuestion(number)) => {
            warn!("Stored quiz is at question {}, starting over", number);
            advance(&bot, &dialogue, &config, msg.chat.id, QuizSession::quiz()).await
        }
        Err(err) => Err(err.into()),
    }
}

async fn basic_input(
    bot: Bot,
    dialogue: HardinessDialogue,
    mut session: QuizSession,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    if switch_mode(&bot, &dialogue, &config, &msg).await? {
        return Ok(());
    }
    match msg.text() {
        Some(SKIP_FIELD) => session.skip()?,
        Some(text) => session.enter(text)?,
        None => {
            bot.send_message(msg.chat.id, "Please enter a number, or skip the field")
                .await?;
            return Ok(());
        }
    };
    advance(&bot, &dialogue, &config, msg.chat.id, session).await
}

async fn result_action(
    bot: Bot,
    dialogue: HardinessDialogue,
    zone: AnswerTag,
    config: Arc<Config>,
    msg: Message,
) -> HandlerResult {
    if switch_mode(&bot, &dialogue, &config, &msg).await? {
        return Ok(());
    }
    let record = zones::lookup(zone);
    match msg.text() {
        Some(SHARE_ZONE) => {
            bot.send_message(msg.chat.id, record.share_text()).await?;
        }
        Some(SAVE_CARD) => {
            let card = InputFile::memory(record.card().into_bytes())
                .file_name(zones::CARD_FILE_NAME);
            bot.send_document(msg.chat.id, card).await?;
        }
        _ => {
            bot.send_message(msg.chat.id, "Please choose one of the options")
                .reply_markup(result_keyboard())
                .await?;
        }
    }
    Ok(())
}

/// Shows the session's next step and stores where the user is.
async fn advance(
    bot: &Bot,
    dialogue: &HardinessDialogue,
    config: &Config,
    chat_id: ChatId,
    session: QuizSession,
) -> HandlerResult {
    send_step(bot, config, chat_id, session.prompt()?).await?;

    let state = match session {
        QuizSession::Answering { .. } => State::Quiz { session },
        QuizSession::BasicInput { .. } => State::Basic { session },
        QuizSession::ResultShown { zone } => State::Result { zone },
    };
    dialogue.update(state).await?;
    Ok(())
}

async fn send_step(bot: &Bot, config: &Config, chat_id: ChatId, step: Step) -> HandlerResult {
    match step {
        Step::Question { number, question } => {
            let text = format!(
                "Question {} of {}:\n<b>{}</b>",
                number,
                QUESTIONS.len(),
                question.text
            );
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(KeyboardMarkup::new(
                    question
                        .options
                        .iter()
                        .map(|o| vec![KeyboardButton::new(o.label)])
                        .collect::<Vec<_>>(),
                ))
                .await?;
        }
        Step::Field(field) => {
            bot.send_message(chat_id, field.label())
                .reply_markup(KeyboardMarkup::new(vec![vec![KeyboardButton::new(
                    SKIP_FIELD,
                )]]))
                .await?;
        }
        Step::Result(zone) => send_result(bot, config, chat_id, zone).await?,
    }
    Ok(())
}

async fn send_result(
    bot: &Bot,
    config: &Config,
    chat_id: ChatId,
    zone: &ZoneRecord,
) -> HandlerResult {
    let card = zone.render_card(|text| format!("<b>{}</b>", text));
    bot.send_message(chat_id, card)
        .parse_mode(ParseMode::Html)
        .reply_markup(result_keyboard())
        .await?;

    let map = config.map_path(zone.map);
    if map.exists() {
        // The card is already out, a missing picture is not worth failing over
        if let Err(err) = bot.send_photo(chat_id, InputFile::file(map.clone())).await {
            warn!("Failed to send zone map {}: {}", map.display(), err);
        }
    } else {
        debug!("No zone map at {}", map.display());
    }
    Ok(())
}
