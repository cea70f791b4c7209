//! Interactive command loop over a [`Session`].
use crate::query::Query;
use crate::render;
use clap::Parser;
use colored::*;
use mmx_dto::*;
use mmx_replay::*;
use std::io::Write;

pub struct Repl {
    session: Session,
    player: Player,
    json: bool,
}

impl Repl {
    pub fn new(session: Session, player: Player, json: bool) -> Self {
        Self {
            session,
            player,
            json,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        log::info!("entering visualizer");
        self.draw()?;
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input).await {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    async fn handle(&mut self, input: &str) -> anyhow::Result<()> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Build { values } => {
                self.session.build_tree(&Query::values(&values))?;
                self.draw()
            }
            Query::Random { size, min, max } => {
                let leaves = self.session.generate_random_tree(size, min..=max)?;
                println!("leaves {}", leaves);
                self.draw()
            }
            Query::Minimax => {
                let value = self.session.run_minimax()?;
                self.searched(value)
            }
            Query::Alphabeta => {
                let value = self.session.run_alpha_beta()?;
                self.searched(value)
            }
            Query::Play => {
                let json = self.json;
                let phase = self
                    .player
                    .play(self.session.replay_mut(), ctrl_c(), |frame| narrate(&frame, json))
                    .await?;
                println!("{}", phase);
                self.draw()
            }
            Query::Step => {
                self.session.step_forward()?;
                match (self.json, self.session.replay().frame()) {
                    (true, Some(frame)) => println!("{}", serde_json::to_string(&frame)?),
                    (false, Some(frame)) => {
                        narrate(&frame, false);
                        self.draw()?;
                    }
                    (_, None) => {}
                }
                Ok(())
            }
            Query::Rewind => {
                self.session.replay_mut().rewind()?;
                self.draw()
            }
            Query::Reset => {
                self.session.reset();
                self.draw()
            }
            Query::Clear => {
                self.session.discard();
                Ok(println!("cleared"))
            }
            Query::Tree => self.draw(),
            Query::Trace => Ok(print!("{}", self.session.replay().trace())),
            Query::Stats => {
                let replay = self.session.replay();
                let live = replay.live()?;
                let last = replay.stats()?;
                match self.json {
                    true => println!("{}", serde_json::to_string(&ApiStats::from(&last))?),
                    false => {
                        println!("{:<8}{}", "live", live);
                        println!("{:<8}{}", "final", last);
                    }
                }
                Ok(())
            }
            Query::Path => {
                let path = self.session.principal()?;
                let line = path
                    .iter()
                    .map(|x| format!("#{}", x.index()))
                    .collect::<Vec<String>>()
                    .join(" → ");
                println!("{}", line);
                self.draw()
            }
        }
    }

    fn searched(&self, value: mmx_core::Score) -> anyhow::Result<()> {
        let replay = self.session.replay();
        println!(
            "{} root {} in {} steps, play or step to replay",
            replay.algorithm().map(|a| a.to_string()).unwrap_or_default(),
            mmx_search::symbol(value).bold(),
            replay.trace().len(),
        );
        Ok(())
    }

    fn draw(&self) -> anyhow::Result<()> {
        let replay = self.session.replay();
        match (self.json, replay.tree()) {
            (_, None) => println!("no tree"),
            (true, Some(_)) => println!("{}", serde_json::to_string(&replay.snapshot()?)?),
            (false, Some(tree)) => println!("{}", render::tree(tree, replay.current())),
        }
        Ok(())
    }
}

/// One playback frame as a single terminal line.
fn narrate(frame: &ApiFrame, json: bool) {
    match json {
        true => match serde_json::to_string(frame) {
            Ok(s) => println!("{}", s),
            Err(e) => log::warn!("unserializable frame: {}", e),
        },
        false => println!(
            "[{:>3}/{:<3}] {:<40} {}",
            frame.cursor,
            frame.total,
            frame.step.message,
            frame.stats.label.dimmed()
        ),
    }
}

/// Resolves on the first Ctrl-C. Never resolves if the handler cannot install.
async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {}
        Err(e) => {
            log::warn!("ctrl-c unavailable: {}", e);
            std::future::pending::<()>().await
        }
    }
}
