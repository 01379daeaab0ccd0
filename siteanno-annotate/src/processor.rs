use log::debug;

use siteanno_core::models::{AnnotationTable, AnnotationValues, RegionSet};
use siteanno_store::{AnnotationGroup, PositionStore};

use crate::AnnotateError;
use crate::features::{distance, is_in};
use crate::ranges::merge_overlapping;

///
/// Annotates every chromosome of a position dataset with one annotation
/// interval set, writing one result table per chromosome back to the store.
///
pub struct Processor {
    store: PositionStore,
    distance: bool,
}

impl Processor {
    pub fn new(store: PositionStore, distance: bool) -> Self {
        Processor { store, distance }
    }

    fn group(&self) -> AnnotationGroup {
        if self.distance {
            AnnotationGroup::Distance
        } else {
            AnnotationGroup::Membership
        }
    }

    ///
    /// Compute the result table for one chromosome: filter the annotation
    /// set to the chromosome, merge overlapping intervals, then compute
    /// membership or distance for every stored position.
    ///
    pub fn annotate(
        &self,
        chromo: &str,
        annos: &RegionSet,
    ) -> Result<AnnotationTable, AnnotateError> {
        let pos = self.store.read_pos(chromo)?;
        let chrom_regions = annos.filter_chrom(chromo);
        let merged = merge_overlapping(&chrom_regions);

        let values = if self.distance {
            AnnotationValues::Distance(distance(&pos, &merged))
        } else {
            AnnotationValues::Membership(is_in(&pos, &merged))
        };

        Ok(AnnotationTable::new(pos, values))
    }

    ///
    /// Annotate one chromosome and persist the result table under the
    /// `annos` (or `annos_dist`) group, keyed by annotation name and
    /// chromosome.
    ///
    pub fn process_chromo(
        &self,
        chromo: &str,
        annos: &RegionSet,
        anno_name: &str,
    ) -> Result<(), AnnotateError> {
        debug!("annotating chromosome {}", chromo);
        let table = self.annotate(chromo, annos)?;
        self.store
            .write_annotation(self.group(), anno_name, chromo, &table)?;
        Ok(())
    }

    ///
    /// Process every chromosome of the dataset in turn. Chromosome writes
    /// are independent; a failure part-way leaves earlier results in place.
    ///
    pub fn process(&self, annos: &RegionSet, anno_name: &str) -> Result<(), AnnotateError> {
        let chromos = self.store.list_chromos()?;
        for chromo in chromos {
            self.process_chromo(&chromo, annos, anno_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use siteanno_core::models::Region;

    fn make_annos(regions: Vec<(&str, u32, u32)>) -> RegionSet {
        let regions: Vec<Region> = regions
            .into_iter()
            .map(|(chr, start, end)| Region {
                chr: chr.to_string(),
                start,
                end,
            })
            .collect();
        RegionSet::from(regions)
    }

    fn make_store(dir: &std::path::Path) -> PositionStore {
        let store = PositionStore::new(dir, "train");
        store.write_pos("1", &[10, 50, 150]).unwrap();
        store.write_pos("2", &[5, 500]).unwrap();
        store
    }

    #[rstest]
    fn test_annotate_membership() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let annos = make_annos(vec![("chr1", 0, 20), ("chr1", 40, 60), ("chr2", 0, 10)]);

        let processor = Processor::new(store, false);
        let table = processor.annotate("1", &annos).unwrap();

        assert_eq!(table.pos, vec![10, 50, 150]);
        assert_eq!(
            table.values,
            AnnotationValues::Membership(vec![true, true, false])
        );
    }

    #[rstest]
    fn test_annotate_distance() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let annos = make_annos(vec![("chr1", 0, 20), ("chr1", 40, 60)]);

        let processor = Processor::new(store, true);
        let table = processor.annotate("1", &annos).unwrap();

        assert_eq!(
            table.values,
            AnnotationValues::Distance(vec![Some(0), Some(0), Some(90)])
        );
    }

    #[rstest]
    fn test_annotate_chromosome_without_intervals() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let annos = make_annos(vec![("chr1", 0, 20)]);

        let membership = Processor::new(store.clone(), false)
            .annotate("2", &annos)
            .unwrap();
        assert_eq!(
            membership.values,
            AnnotationValues::Membership(vec![false, false])
        );

        let dist = Processor::new(store, true).annotate("2", &annos).unwrap();
        assert_eq!(dist.values, AnnotationValues::Distance(vec![None, None]));
    }

    #[rstest]
    fn test_annotate_premerged_input_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());

        let raw = make_annos(vec![("chr1", 0, 10), ("chr1", 5, 20), ("chr1", 40, 60)]);
        let premerged = make_annos(vec![("chr1", 0, 20), ("chr1", 40, 60)]);

        let processor = Processor::new(store, true);
        assert_eq!(
            processor.annotate("1", &raw).unwrap(),
            processor.annotate("1", &premerged).unwrap()
        );
    }

    #[rstest]
    fn test_process_writes_all_chromosomes() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let annos = make_annos(vec![("chr1", 0, 20), ("chr2", 0, 10)]);

        let processor = Processor::new(store.clone(), false);
        processor.process(&annos, "cgi").unwrap();

        let chr1 = store
            .read_annotation(AnnotationGroup::Membership, "cgi", "1")
            .unwrap();
        assert_eq!(
            chr1.values,
            AnnotationValues::Membership(vec![true, false, false])
        );

        let chr2 = store
            .read_annotation(AnnotationGroup::Membership, "cgi", "2")
            .unwrap();
        assert_eq!(
            chr2.values,
            AnnotationValues::Membership(vec![true, false])
        );
    }

    #[rstest]
    fn test_process_distance_uses_dist_group() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let annos = make_annos(vec![("chr1", 0, 20)]);

        Processor::new(store.clone(), true)
            .process(&annos, "cgi")
            .unwrap();

        // written under annos_dist, not annos
        assert!(store
            .read_annotation(AnnotationGroup::Membership, "cgi", "1")
            .is_err());
        let table = store
            .read_annotation(AnnotationGroup::Distance, "cgi", "1")
            .unwrap();
        assert_eq!(table.len(), 3);
    }

    #[rstest]
    fn test_rerun_reproduces_identical_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(dir.path());
        let annos = make_annos(vec![("chr1", 0, 20), ("chr1", 40, 60)]);

        let processor = Processor::new(store.clone(), false);
        processor.process(&annos, "cgi").unwrap();
        let first = store
            .read_annotation(AnnotationGroup::Membership, "cgi", "1")
            .unwrap();

        processor.process(&annos, "cgi").unwrap();
        let second = store
            .read_annotation(AnnotationGroup::Membership, "cgi", "1")
            .unwrap();

        assert_eq!(first, second);
    }
}
