//! The scan loop: terms, forms, skips.

use dilug_common::error::Error;
use dilug_common::result::Result;
use dilug_els::matchers::{Matcher, MatcherType, create_matcher};
use dilug_els::search::{char_positions, find_at_skip, find_at_skip_pruned};
use dilug_text::{Corpus, normalize};

use crate::cancel::CancellationToken;
use crate::config::ScanConfig;
use crate::events::{BestHit, ScanEvent, ScanOutcome};
use crate::hit::Hit;
use crate::sink::HitSink;
use crate::term::SearchTerm;

/// A spelling form normalized and ready to search.
struct ResolvedForm {
    text: String,
    chars: Vec<char>,
}

struct ResolvedTerm {
    word: String,
    forms: Vec<ResolvedForm>,
}

enum FormStrategy {
    /// Candidate starts pruned to the first character's positions.
    Pruned { candidates: Vec<usize> },
    /// Matcher search over the skip-view sequences.
    Matcher(MatcherType),
}

/// Runs scans over one corpus.
///
/// Hits are buffered and flushed to the sink in batches of at least
/// [`flush_threshold`](ScanConfig::flush_threshold), so memory stays
/// bounded regardless of how many occurrences the corpus holds. The token
/// is checked before every term, every form and every skip; a cancelled
/// scan keeps the batches it already flushed and discards the rest.
pub struct Scanner<'a> {
    corpus: &'a Corpus,
    config: ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(corpus: &'a Corpus, config: ScanConfig) -> Result<Scanner<'a>> {
        config.validate()?;
        Ok(Scanner { corpus, config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Searches every term across the configured skip range, streaming hit
    /// batches into `sink` and lifecycle events into `on_event`.
    ///
    /// Any error aborts the scan and propagates; batches flushed before the
    /// error remain in the sink.
    pub fn run(
        &self,
        terms: &[SearchTerm],
        sink: &mut dyn HitSink,
        token: &CancellationToken,
        mut on_event: impl FnMut(ScanEvent),
    ) -> Result<ScanOutcome> {
        sink.reset()?;
        let resolved = resolve_terms(terms)?;
        let text = self.corpus.chars();

        let total_terms = resolved.len();
        let total_forms: usize = resolved.iter().map(|term| term.forms.len()).sum();
        let skip_span = self.config.skip_span();
        let mut forms_searched = 0_usize;
        let mut flushed_hits = 0_usize;
        let mut total_hits = 0_usize;

        for (term_index, term) in resolved.iter().enumerate() {
            if token.is_cancelled() {
                on_event(ScanEvent::Cancelled);
                return Ok(ScanOutcome::Cancelled { flushed_hits });
            }

            let mut buffer: Vec<Hit> = Vec::new();
            let mut hit_count = 0_usize;
            let mut best: Option<BestHit> = None;

            for form in &term.forms {
                if token.is_cancelled() {
                    on_event(ScanEvent::Cancelled);
                    return Ok(ScanOutcome::Cancelled { flushed_hits });
                }

                let strategy = self.form_strategy(form)?;

                let mut skips_done = 0_usize;
                for skip in self.config.min_skip..=self.config.max_skip {
                    if token.is_cancelled() {
                        on_event(ScanEvent::Cancelled);
                        return Ok(ScanOutcome::Cancelled { flushed_hits });
                    }
                    if skip == 0 {
                        continue;
                    }

                    let found = match &strategy {
                        FormStrategy::Pruned { candidates } => {
                            find_at_skip_pruned(text, &form.chars, skip, candidates)
                        }
                        FormStrategy::Matcher(matcher) => find_at_skip(text, matcher, skip)?,
                    };
                    for position in found {
                        if best.is_none_or(|b| skip.unsigned_abs() < b.skip.unsigned_abs()) {
                            best = Some(BestHit { skip, position });
                        }
                        buffer.push(Hit {
                            term: term.word.clone(),
                            form: form.text.clone(),
                            position,
                            skip,
                        });
                        hit_count += 1;
                    }

                    if buffer.len() >= self.config.flush_threshold {
                        sink.flush_batch(&buffer)?;
                        flushed_hits += buffer.len();
                        buffer.clear();
                    }

                    skips_done += 1;
                    if skips_done % self.config.progress_interval == 0 {
                        on_event(ScanEvent::Progress {
                            term: term.word.clone(),
                            term_index,
                            forms_searched: forms_searched as f64 + skips_done as f64 / skip_span,
                            total_forms,
                            hits_so_far: hit_count,
                        });
                    }
                }

                forms_searched += 1;
                on_event(ScanEvent::Progress {
                    term: term.word.clone(),
                    term_index,
                    forms_searched: forms_searched as f64,
                    total_forms,
                    hits_so_far: hit_count,
                });
            }

            if !buffer.is_empty() {
                sink.flush_batch(&buffer)?;
                flushed_hits += buffer.len();
                buffer.clear();
            }

            total_hits += hit_count;
            on_event(ScanEvent::TermDone {
                term: term.word.clone(),
                term_index,
                total_terms,
                hit_count,
                best,
            });
        }

        on_event(ScanEvent::Complete { total_terms });
        Ok(ScanOutcome::Completed {
            total_terms,
            total_hits,
        })
    }

    fn form_strategy(&self, form: &ResolvedForm) -> Result<FormStrategy> {
        if self.config.first_char_pruning {
            Ok(FormStrategy::Pruned {
                candidates: char_positions(self.corpus.chars(), form.chars[0]),
            })
        } else {
            Ok(FormStrategy::Matcher(create_matcher(
                self.config.matcher,
                &form.text,
            )?))
        }
    }
}

fn resolve_terms(terms: &[SearchTerm]) -> Result<Vec<ResolvedTerm>> {
    terms
        .iter()
        .map(|term| {
            let forms = term
                .search_forms()
                .into_iter()
                .map(|form| {
                    let text = normalize(form);
                    if text.is_empty() {
                        return Err(Error::invalid_pattern(format!(
                            "form '{form}' of term '{}' is empty after normalization",
                            term.word
                        )));
                    }
                    let chars = text.chars().collect();
                    Ok(ResolvedForm { text, chars })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ResolvedTerm {
                word: term.word.clone(),
                forms,
            })
        })
        .collect()
}
