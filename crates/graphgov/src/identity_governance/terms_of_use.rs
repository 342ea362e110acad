//! `/identityGovernance/termsOfUse`.

use crate::builders::{CollectionRequestBuilder, ItemRequestBuilder, SingletonRequestBuilder};
use crate::models::{
    Agreement, AgreementAcceptance, AgreementFile, AgreementFileLocalization,
    AgreementFileVersion, TermsOfUseContainer,
};

impl SingletonRequestBuilder<TermsOfUseContainer> {
    /// Acceptances across all agreements.
    #[must_use]
    pub fn agreement_acceptances(&self) -> CollectionRequestBuilder<AgreementAcceptance> {
        CollectionRequestBuilder::new(self.path().join("agreementAcceptances"))
    }

    #[must_use]
    pub fn agreements(&self) -> CollectionRequestBuilder<Agreement> {
        CollectionRequestBuilder::new(self.path().join("agreements"))
    }
}

impl ItemRequestBuilder<Agreement> {
    #[must_use]
    pub fn acceptances(&self) -> CollectionRequestBuilder<AgreementAcceptance> {
        CollectionRequestBuilder::new(self.path().join("acceptances"))
    }

    /// The default agreement file.
    #[must_use]
    pub fn file(&self) -> SingletonRequestBuilder<AgreementFile> {
        SingletonRequestBuilder::new(self.path().join("file"))
    }

    #[must_use]
    pub fn files(&self) -> CollectionRequestBuilder<AgreementFileLocalization> {
        CollectionRequestBuilder::new(self.path().join("files"))
    }
}

impl SingletonRequestBuilder<AgreementFile> {
    #[must_use]
    pub fn localizations(&self) -> CollectionRequestBuilder<AgreementFileLocalization> {
        CollectionRequestBuilder::new(self.path().join("localizations"))
    }
}

impl ItemRequestBuilder<AgreementFileLocalization> {
    #[must_use]
    pub fn versions(&self) -> CollectionRequestBuilder<AgreementFileVersion> {
        CollectionRequestBuilder::new(self.path().join("versions"))
    }
}
