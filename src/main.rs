// src/main.rs
//
// Calculatrice sûre — point d’entrée (terminal)
// ---------------------------------------------
// But:
// - `calculatrice "expr"` : une évaluation, code de sortie 2 si l'expression est refusée
// - `calculatrice`        : lecture ligne par ligne (interactif si terminal)
// - Journal sur stderr (RUST_LOG, sinon -v / -vv), résultats seuls sur stdout
//
// Une expression peut commencer par un signe : calculatrice "-1 + 2"

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod app;

use app::{FormatSortie, Reglages, Session};
use calculatrice_sure::outils::RegistreOutils;

/// Code de sortie quand l'expression est refusée (distinct d'une faute d'E/S
/// ou d'un usage invalide, qui sortent en 1).
const CODE_REFUS: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "calculatrice",
    version,
    about = "Calculatrice sûre : arithmétique en bac à sable (+ - * / // % ** et parenthèses)"
)]
struct Cli {
    /// Expression à évaluer ; sans expression, lecture ligne par ligne sur l'entrée standard
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Affiche la démarche (jetons, RPN, arbre)
    #[arg(
        short,
        long,
        env = "CALC_DEMARCHE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    demarche: bool,

    /// Format de sortie
    #[arg(short, long, value_enum, default_value_t = FormatSortie::Texte, env = "CALC_FORMAT")]
    format: FormatSortie,

    /// Liste les outils disponibles puis quitte
    #[arg(long)]
    outils: bool,

    /// Journal plus bavard (-v info, -vv debug) ; RUST_LOG a priorité
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_journal(verbose: u8) {
    let defaut = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // usage invalide : 1 (le code 2 est réservé aux expressions refusées)
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_journal(cli.verbose);

    match executer(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("erreur : {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn executer(cli: Cli) -> Result<ExitCode> {
    let reglages = Reglages::default()
        .with_demarche(cli.demarche)
        .with_format(cli.format);
    let registre = RegistreOutils::avec_outils_par_defaut();
    debug!(outils = registre.len(), "registre prêt");
    let mut stdout = io::stdout().lock();

    if cli.outils {
        writeln!(stdout, "{}", registre.descriptions()).context("écriture sur stdout")?;
        return Ok(ExitCode::SUCCESS);
    }

    // 1) Une seule expression
    if let Some(expression) = cli.expression {
        let mut session = Session {
            entree: expression,
            ..Session::default()
        };
        session.eval_via_noyau();
        let rendu = session
            .rendu(&reglages)
            .context("sérialisation du résultat")?;

        if !session.en_erreur() {
            writeln!(stdout, "{rendu}").context("écriture sur stdout")?;
            return Ok(ExitCode::SUCCESS);
        }

        // JSON : l'objet d'erreur reste sur stdout (un consommateur le lit)
        match reglages.format {
            FormatSortie::Json => writeln!(stdout, "{rendu}").context("écriture sur stdout")?,
            FormatSortie::Texte => eprintln!("{rendu}"),
        }
        return Ok(ExitCode::from(CODE_REFUS));
    }

    // 2) Boucle
    let stdin = io::stdin();
    let invite = stdin.is_terminal();
    let session = app::boucle(stdin.lock(), &mut stdout, &reglages, &registre, invite)?;

    info!(
        evaluations = session.evaluations,
        refus = session.refus,
        "fin de session"
    );
    Ok(ExitCode::SUCCESS)
}
