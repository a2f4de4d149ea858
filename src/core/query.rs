use crate::core::registry::Registry;
use crate::core::views::{AuthorView, ContractView};

impl Registry {
    /// Contracts signed on exactly `date`, sorted by author name then book
    /// title. Equal keys keep signing order.
    pub fn contracts_matching_date(&self, date: &str) -> Vec<ContractView<'_>> {
        let mut matching: Vec<ContractView<'_>> = self
            .contracts()
            .filter(|contract| contract.date() == date)
            .collect();
        matching.sort_by(|a, b| {
            a.author()
                .name()
                .cmp(b.author().name())
                .then_with(|| a.book().title().cmp(b.book().title()))
        });

        tracing::debug!(date, matches = matching.len(), "Queried contracts by date");
        matching
    }

    /// Total royalties per author, in registration order.
    pub fn royalties_by_author(&self) -> Vec<(AuthorView<'_>, u128)> {
        self.authors()
            .map(|author| {
                let total = author.total_royalties();
                (author, total)
            })
            .collect()
    }
}
