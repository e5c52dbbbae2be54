use colored::Colorize;

use crate::league::{MatchView, RoundOutcome, Standings};

pub fn print_standings(standings: &Standings) {
    println!("{}", "Standings".bold());
    if standings.players.is_empty() {
        println!("  no players registered");
    }
    for (rank, player) in standings.players.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} {:>6}  {}",
            rank + 1,
            player.name,
            player.score.to_string().bold(),
            format!("#{}", player.id).dimmed()
        );
    }

    print_matches("Confirmed matches", &standings.confirmed_matches);
    print_matches("Pending matches", &standings.pending_matches);
}

fn print_matches(title: &str, matches: &[MatchView]) {
    println!();
    println!("{} ({})", title.bold(), matches.len());
    for game in matches {
        println!("  {}", format_match(game));
    }
}

fn format_match(game: &MatchView) -> String {
    let (one, two) = (
        format!("{} {}", game.player_one_name, game.player_one_score),
        format!("{} {}", game.player_two_score, game.player_two_name),
    );
    let (one, two) = if game.player_one_score > game.player_two_score {
        (one.green().to_string(), two)
    } else {
        (one, two.green().to_string())
    };
    format!("{} - {}  {}", one, two, game.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed())
}

pub fn print_round(round: &RoundOutcome) {
    match round {
        RoundOutcome::Confirmed(summary) => {
            println!(
                "{} {} matches confirmed",
                "Round confirmed:".green().bold(),
                summary.confirmed_matches.len()
            );
            for change in &summary.score_changes {
                println!("  player #{} +{} -> {}", change.player_id, change.gained, change.score);
            }
        }
        RoundOutcome::Incomplete { missing_pairs } => {
            println!("{} {} pairs still to play", "Round not yet complete:".yellow(), missing_pairs.len());
            for (first, second) in missing_pairs {
                println!("  #{first} vs #{second}");
            }
        }
    }
}
